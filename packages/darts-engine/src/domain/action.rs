//! Action vocabulary dispatched by the host.

use serde::{Deserialize, Serialize};

use crate::domain::options::{DonkeyDerbyOptions, GameType, KillerOptions, X01Options};
use crate::domain::player::PlayerId;

/// Payload of `START_GAME`. Absent option structs keep the state's current ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartGame {
    pub game_type: GameType,
    pub options: Option<X01Options>,
    pub killer_options: Option<KillerOptions>,
    pub donkey_derby_options: Option<DonkeyDerbyOptions>,
    /// Segment-assignment seed; derived from the previous game when absent.
    pub seed: Option<u64>,
}

impl StartGame {
    pub fn new(game_type: GameType) -> Self {
        Self {
            game_type,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddPlayer {
        name: String,
        #[serde(default)]
        colour: Option<String>,
    },
    RemovePlayer {
        id: PlayerId,
    },
    SetPlayerOrder {
        ids: Vec<PlayerId>,
    },
    StartGame(StartGame),
    AddDart {
        notation: String,
    },
    RemoveDart,
    SubmitThrow,
    ProcessKillerDartHit {
        notation: String,
    },
    RemoveKillerDart,
    KillerSubmitThrow,
    EndTurn,
    EndGame {
        #[serde(default)]
        winner: Option<PlayerId>,
    },
    UndoScore,
    ResetGame,
}

impl Action {
    pub fn add_dart(notation: impl Into<String>) -> Self {
        Action::AddDart {
            notation: notation.into(),
        }
    }

    pub fn killer_hit(notation: impl Into<String>) -> Self {
        Action::ProcessKillerDartHit {
            notation: notation.into(),
        }
    }

    pub fn add_player(name: impl Into<String>) -> Self {
        Action::AddPlayer {
            name: name.into(),
            colour: None,
        }
    }

    /// Wire name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer { .. } => "ADD_PLAYER",
            Action::RemovePlayer { .. } => "REMOVE_PLAYER",
            Action::SetPlayerOrder { .. } => "SET_PLAYER_ORDER",
            Action::StartGame(_) => "START_GAME",
            Action::AddDart { .. } => "ADD_DART",
            Action::RemoveDart => "REMOVE_DART",
            Action::SubmitThrow => "SUBMIT_THROW",
            Action::ProcessKillerDartHit { .. } => "PROCESS_KILLER_DART_HIT",
            Action::RemoveKillerDart => "REMOVE_KILLER_DART",
            Action::KillerSubmitThrow => "KILLER_SUBMIT_THROW",
            Action::EndTurn => "END_TURN",
            Action::EndGame { .. } => "END_GAME",
            Action::UndoScore => "UNDO_SCORE",
            Action::ResetGame => "RESET_GAME",
        }
    }
}

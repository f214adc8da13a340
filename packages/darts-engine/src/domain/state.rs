use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::options::{DonkeyDerbyOptions, GameType, KillerOptions, X01Options};
use crate::domain::player::{Player, PlayerId};
use crate::domain::throw_buffer::ThrowBuffer;

/// Overall game progression. One-way except for `RESET_GAME`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Roster editing; no game running.
    #[default]
    Setup,
    Active,
    Complete,
}

/// Aggregates that outlive a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub games_played: u32,
    /// Wins keyed by player name.
    pub player_wins: BTreeMap<String, u32>,
}

/// A committed visit in table order. Killer and Donkey Derby rebuild their
/// per-player fields by replaying this log; X01 keeps the current leg's
/// visits here so undo follows commit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedVisit {
    pub player_index: usize,
    pub darts: Vec<String>,
    /// Round the visit was thrown in.
    #[serde(default)]
    pub turn: u32,
}

/// Entire game container, sufficient for every pure transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(default)]
    pub options: X01Options,
    #[serde(default)]
    pub killer_options: KillerOptions,
    #[serde(default)]
    pub donkey_derby_options: DonkeyDerbyOptions,
    pub status: GameStatus,
    /// 1-based round counter; increments whenever play wraps back to index 0.
    pub current_turn: u32,
    pub winner: Option<PlayerId>,
    /// Who opens the current X01 leg.
    #[serde(default)]
    pub leg_starter_index: usize,
    #[serde(default)]
    pub current_throw: ThrowBuffer,
    /// Shanghai's table-wide target segment (1..=9).
    #[serde(default = "first_shanghai_segment")]
    pub shanghai_segment: u8,
    #[serde(default)]
    pub visit_log: Vec<LoggedVisit>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub next_player_id: PlayerId,
    #[serde(default)]
    pub session: SessionStats,
}

fn first_shanghai_segment() -> u8 {
    1
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn order helper: the index after `index` in a table of `len` players.
#[inline]
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            game_type: GameType::default(),
            options: X01Options::default(),
            killer_options: KillerOptions::default(),
            donkey_derby_options: DonkeyDerbyOptions::default(),
            status: GameStatus::Setup,
            current_turn: 1,
            winner: None,
            leg_starter_index: 0,
            current_throw: ThrowBuffer::new(),
            shanghai_segment: first_shanghai_segment(),
            visit_log: Vec::new(),
            seed: 0,
            next_player_id: 1,
            session: SessionStats::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.current_player_index)
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Pass play to the next seat; the turn counter ticks when it wraps to 0.
    pub fn advance_turn(&mut self) {
        self.current_throw.clear();
        self.current_player_index = next_index(self.current_player_index, self.players.len());
        if self.current_player_index == 0 {
            self.current_turn += 1;
        }
    }

    /// Terminal transition: record the winner (if any) and complete the game.
    pub fn finish(&mut self, winner_index: Option<usize>) {
        if self.status == GameStatus::Complete {
            return;
        }
        self.current_throw.clear();
        self.status = GameStatus::Complete;
        self.session.games_played += 1;
        self.winner = None;
        if let Some(player) = winner_index.and_then(|i| self.players.get_mut(i)) {
            player.wins += 1;
            self.winner = Some(player.id);
            *self
                .session
                .player_wins
                .entry(player.name.clone())
                .or_insert(0) += 1;
        }
    }
}

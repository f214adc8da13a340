//! Read model for hosts: what to draw after each transition.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::{suggest_checkout, Checkout};
use crate::domain::options::GameType;
use crate::domain::player::{Player, PlayerId};
use crate::domain::state::{GameState, GameStatus};
use crate::domain::stats::PlayerStats;

/// Public info about one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub colour: String,
    pub score: u32,
    pub legs_won: u32,
    pub sets_won: u32,
    pub wins: u32,
    pub stats: PlayerStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<u8>,
    pub is_killer: bool,
    pub segment_hits: i32,
    pub is_eliminated: bool,
    pub shanghai_total: u32,
    pub donkey_progress: u32,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            colour: player.colour.clone(),
            score: player.score,
            legs_won: player.legs_won,
            sets_won: player.sets_won,
            wins: player.wins,
            stats: player.stats.clone(),
            segment: player.segment,
            is_killer: player.is_killer,
            segment_hits: player.segment_hits,
            is_eliminated: player.is_eliminated,
            shanghai_total: player.shanghai_total(),
            donkey_progress: player.donkey_progress,
        }
    }
}

/// The visit in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub player_id: PlayerId,
    pub darts: Vec<String>,
    pub pending_total: u32,
    pub darts_remaining: usize,
    /// X01 score after the pending darts; negative means a pending bust.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i32>,
    /// X01 advice for the remaining score and darts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<Checkout>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_type: GameType,
    pub status: GameStatus,
    pub current_turn: u32,
    /// Shanghai's active segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_segment: Option<u8>,
    pub winner: Option<PlayerId>,
    pub players: Vec<PlayerSummary>,
    /// Present while a game is running.
    pub turn: Option<TurnSnapshot>,
}

impl GameSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let turn = state
            .is_active()
            .then(|| state.current_player().map(|player| turn_snapshot(state, player)))
            .flatten();
        Self {
            game_type: state.game_type,
            status: state.status,
            current_turn: state.current_turn,
            target_segment: (state.game_type == GameType::Shanghai)
                .then_some(state.shanghai_segment),
            winner: state.winner,
            players: state.players.iter().map(PlayerSummary::from).collect(),
            turn,
        }
    }

    /// Players best first: X01 by sets, legs then lowest score; Shanghai by
    /// total; Killer by survival then hits; Donkey Derby by progress.
    pub fn standings(&self) -> Vec<&PlayerSummary> {
        let mut ranked: Vec<&PlayerSummary> = self.players.iter().collect();
        match self.game_type {
            GameType::X01 => ranked.sort_by_key(|p| {
                (std::cmp::Reverse(p.sets_won), std::cmp::Reverse(p.legs_won), p.score)
            }),
            GameType::Shanghai => ranked.sort_by_key(|p| std::cmp::Reverse(p.shanghai_total)),
            GameType::Killer => {
                ranked.sort_by_key(|p| (p.is_eliminated, std::cmp::Reverse(p.segment_hits)))
            }
            GameType::DonkeyDerby => {
                ranked.sort_by_key(|p| std::cmp::Reverse(p.donkey_progress))
            }
        }
        ranked
    }
}

fn turn_snapshot(state: &GameState, player: &Player) -> TurnSnapshot {
    let buffer = &state.current_throw;
    let pending_total = buffer.total();
    let darts_remaining = buffer.darts_remaining();
    let (remaining, checkout) = if state.game_type == GameType::X01 {
        let remaining = (i64::from(player.score) - i64::from(pending_total))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let hint = (darts_remaining > 0)
            .then(|| suggest_checkout(remaining, state.options.out_mode, darts_remaining));
        (Some(remaining), hint)
    } else {
        (None, None)
    };
    TurnSnapshot {
        player_id: player.id,
        darts: buffer.darts().to_vec(),
        pending_total,
        darts_remaining,
        remaining,
        checkout,
    }
}

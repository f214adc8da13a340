use serde::{Deserialize, Serialize};

use crate::domain::options::GameType;
use crate::domain::player::{Player, PlayerId, VisitOutcome};
use crate::domain::state::{GameState, GameStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: status moved into Active.
    GameStarted { game_type: GameType },

    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// X01: the player's latest visit busted.
    Bust { player_id: PlayerId },

    /// X01: the player checked out a leg.
    LegWon { player_id: PlayerId },

    /// X01: the player took a set.
    SetWon { player_id: PlayerId },

    /// Killer: the player reached the hit threshold.
    BecameKiller { player_id: PlayerId },

    /// Killer: the player was knocked out.
    PlayerEliminated { player_id: PlayerId },

    /// Edge-triggered: status moved into Complete.
    GameEnded { winner: Option<PlayerId> },
}

/// Derive events from a before/after pair of states.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();
    let started = before.status != GameStatus::Active && after.status == GameStatus::Active;

    // 1. Game start
    if started {
        transitions.push(GameTransition::GameStarted {
            game_type: after.game_type,
        });
    }

    // 2. Per-player edges, matched by id
    if !started {
        for player in &after.players {
            if let Some(prev) = before.players.iter().find(|p| p.id == player.id) {
                player_edges(prev, player, &mut transitions);
            }
        }
    }

    // 3. Turn change
    if after.is_active() {
        let turn_before = before
            .is_active()
            .then(|| before.current_player().map(|p| p.id))
            .flatten();
        if let Some(player_id) = after.current_player().map(|p| p.id) {
            if started || turn_before != Some(player_id) {
                transitions.push(GameTransition::TurnBecame { player_id });
            }
        }
    }

    // 4. Game end
    if before.status != GameStatus::Complete && after.status == GameStatus::Complete {
        transitions.push(GameTransition::GameEnded {
            winner: after.winner,
        });
    }

    transitions
}

fn player_edges(before: &Player, after: &Player, out: &mut Vec<GameTransition>) {
    let player_id = after.id;
    if after.throws.len() > before.throws.len()
        && after.throws.last().map(|v| v.outcome) == Some(VisitOutcome::Bust)
    {
        out.push(GameTransition::Bust { player_id });
    }
    if after.stats.checkouts_completed > before.stats.checkouts_completed {
        out.push(GameTransition::LegWon { player_id });
    }
    if after.sets_won > before.sets_won {
        out.push(GameTransition::SetWon { player_id });
    }
    if after.is_killer && !before.is_killer {
        out.push(GameTransition::BecameKiller { player_id });
    }
    if after.is_eliminated && !before.is_eliminated {
        out.push(GameTransition::PlayerEliminated { player_id });
    }
}

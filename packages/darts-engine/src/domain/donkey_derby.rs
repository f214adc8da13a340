//! Donkey Derby: race your donkey to the finish line, knock rivals back.

use tracing::{debug, info};

use crate::domain::action::Action;
use crate::domain::notation::Dart;
use crate::domain::player::{Player, Visit};
use crate::domain::score::dart_or_miss;
use crate::domain::segments::seat_segments;
use crate::domain::state::{GameState, LoggedVisit};
use crate::domain::variant::VariantRules;

pub struct DonkeyDerbyRules;

impl VariantRules for DonkeyDerbyRules {
    fn start(&self, state: &mut GameState) {
        seat_segments(state);
        for player in &mut state.players {
            player.donkey_progress = 0;
        }
        state.visit_log.clear();
        state.current_player_index = 0;
    }

    fn apply(&self, state: &mut GameState, action: &Action) {
        match action {
            Action::AddDart { notation } => process_dart(state, notation),
            Action::RemoveDart => remove_dart(state),
            Action::SubmitThrow => {
                if !state.current_throw.is_empty() {
                    end_visit(state);
                }
            }
            Action::EndTurn => end_visit(state),
            other => debug!(action = other.name(), "Action not used by Donkey Derby"),
        }
    }
}

/// Apply one dart thrown by `actor`. Returns `true` when the actor reached the line.
pub fn resolve_hit(players: &mut [Player], actor: usize, dart: Dart, finish_line: u32) -> bool {
    let (Some(segment), Some(multiplier)) = (dart.segment(), dart.multiplier()) else {
        return false;
    };
    let step = multiplier.factor();
    let Some(owner) = players.iter().position(|p| p.segment == Some(segment)) else {
        return false;
    };

    let donkey = &mut players[owner];
    if owner == actor {
        donkey.donkey_progress = (donkey.donkey_progress + step).min(finish_line);
        donkey.donkey_progress >= finish_line
    } else {
        donkey.donkey_progress = donkey.donkey_progress.saturating_sub(step);
        false
    }
}

fn process_dart(state: &mut GameState, notation: &str) {
    if !state.is_active() || state.current_throw.is_full() {
        return;
    }
    let actor = state.current_player_index;
    if actor >= state.players.len() {
        return;
    }
    state.current_throw.add_dart(notation);
    let finish_line = state.donkey_derby_options.finish_line;
    if resolve_hit(&mut state.players, actor, dart_or_miss(notation), finish_line) {
        // The race ends on this dart, whatever is left of the visit.
        commit_pending(state);
        info!(winner = state.players[actor].id, "Donkey crossed the line");
        state.finish(Some(actor));
    }
}

fn remove_dart(state: &mut GameState) {
    if !state.is_active() || state.current_throw.remove_last_dart().is_none() {
        return;
    }
    replay(state);
}

/// Rebuild every donkey's progress from the visit log and the pending darts.
pub fn replay(state: &mut GameState) {
    let finish_line = state.donkey_derby_options.finish_line;
    let GameState {
        players,
        visit_log,
        current_throw,
        current_player_index,
        ..
    } = state;

    for player in players.iter_mut() {
        player.donkey_progress = 0;
    }
    for logged in visit_log.iter() {
        for dart in &logged.darts {
            resolve_hit(players, logged.player_index, dart_or_miss(dart), finish_line);
        }
    }
    for dart in current_throw.darts() {
        resolve_hit(players, *current_player_index, dart_or_miss(dart), finish_line);
    }
}

/// Re-derive progress after a roster change. Dropping a player also drops
/// their knockbacks, which can carry a rival over the line.
pub(crate) fn settle_after_removal(state: &mut GameState) {
    replay(state);
    let finish_line = state.donkey_derby_options.finish_line;
    let Some(winner) = state
        .players
        .iter()
        .position(|p| p.donkey_progress >= finish_line)
    else {
        return;
    };
    commit_pending(state);
    info!(winner = state.players[winner].id, "Donkey crossed the line");
    state.finish(Some(winner));
}

fn commit_pending(state: &mut GameState) {
    let index = state.current_player_index;
    let darts = state.current_throw.take();
    if darts.is_empty() {
        return;
    }
    state.visit_log.push(LoggedVisit {
        player_index: index,
        darts: darts.clone(),
        turn: state.current_turn,
    });
    if let Some(player) = state.players.get_mut(index) {
        let before = player.donkey_progress;
        player.throws.push(Visit::scored(darts, before, 0));
    }
}

fn end_visit(state: &mut GameState) {
    if !state.is_active() {
        return;
    }
    commit_pending(state);
    state.advance_turn();
}

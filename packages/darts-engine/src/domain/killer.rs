//! Killer: build hits on your own segment, then knock opponents out.
//!
//! Forward darts are resolved one at a time. Undo rebuilds every player's
//! Killer fields by replaying the visit log plus the pending darts, so a
//! capped hit or an elimination is reverted exactly.

use tracing::{debug, info};

use crate::domain::action::Action;
use crate::domain::notation::Dart;
use crate::domain::player::{Player, Visit};
use crate::domain::rules::KILLER_ELIMINATION_HITS;
use crate::domain::score::dart_or_miss;
use crate::domain::segments::seat_segments;
use crate::domain::state::{GameState, LoggedVisit};
use crate::domain::variant::VariantRules;

pub struct KillerRules;

impl VariantRules for KillerRules {
    fn start(&self, state: &mut GameState) {
        seat_segments(state);
        for player in &mut state.players {
            player.reset_race_fields();
        }
        state.visit_log.clear();
        state.current_player_index = 0;
    }

    fn apply(&self, state: &mut GameState, action: &Action) {
        match action {
            Action::ProcessKillerDartHit { notation } | Action::AddDart { notation } => {
                process_dart(state, notation)
            }
            Action::RemoveKillerDart | Action::RemoveDart => remove_dart(state),
            Action::KillerSubmitThrow | Action::SubmitThrow => {
                if !state.current_throw.is_empty() {
                    end_visit(state);
                }
            }
            Action::EndTurn => end_visit(state),
            other => debug!(action = other.name(), "Action not used by Killer"),
        }
    }
}

/// Apply one dart thrown by `actor`. Returns the index of a newly eliminated player.
pub fn resolve_hit(
    players: &mut [Player],
    actor: usize,
    dart: Dart,
    max_hits: u32,
) -> Option<usize> {
    let (Some(segment), Some(multiplier)) = (dart.segment(), dart.multiplier()) else {
        return None;
    };
    let value = multiplier.factor() as i32;
    let max_hits = max_hits as i32;

    if players.get(actor)?.segment == Some(segment) {
        let me = &mut players[actor];
        me.segment_hits = (me.segment_hits + value).min(max_hits);
        if me.segment_hits >= max_hits {
            me.is_killer = true;
        }
        return None;
    }

    if !players[actor].is_killer {
        return None;
    }
    let target = players
        .iter()
        .position(|p| p.segment == Some(segment) && !p.is_eliminated)?;
    let victim = &mut players[target];
    victim.segment_hits -= value;
    if victim.segment_hits > KILLER_ELIMINATION_HITS {
        return None;
    }
    victim.is_eliminated = true;
    players[actor].players_eliminated += 1;
    Some(target)
}

fn process_dart(state: &mut GameState, notation: &str) {
    if !state.is_active() || state.current_throw.is_full() {
        return;
    }
    let actor = state.current_player_index;
    if state.players.get(actor).map_or(true, |p| p.is_eliminated) {
        return;
    }
    state.current_throw.add_dart(notation);
    let max_hits = state.killer_options.max_hits;
    if let Some(victim) = resolve_hit(&mut state.players, actor, dart_or_miss(notation), max_hits)
    {
        info!(
            eliminated = state.players[victim].id,
            by = state.players[actor].id,
            "Player eliminated"
        );
    }
    check_winner(state);
}

fn remove_dart(state: &mut GameState) {
    if !state.is_active() || state.current_throw.remove_last_dart().is_none() {
        return;
    }
    replay(state);
}

/// Rebuild Killer fields from the visit log and the pending darts.
pub fn replay(state: &mut GameState) {
    let max_hits = state.killer_options.max_hits;
    let GameState {
        players,
        visit_log,
        current_throw,
        current_player_index,
        ..
    } = state;

    for player in players.iter_mut() {
        player.is_killer = false;
        player.segment_hits = 0;
        player.is_eliminated = false;
        player.players_eliminated = 0;
    }
    for logged in visit_log.iter() {
        for dart in &logged.darts {
            resolve_hit(players, logged.player_index, dart_or_miss(dart), max_hits);
        }
    }
    for dart in current_throw.darts() {
        resolve_hit(players, *current_player_index, dart_or_miss(dart), max_hits);
    }
}

/// Move the pending darts into history.
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
        let before = player.score;
        player.throws.push(Visit::scored(darts, before, 0));
    }
}

fn end_visit(state: &mut GameState) {
    if !state.is_active() {
        return;
    }
    commit_pending(state);
    state.advance_turn();
    skip_eliminated(state);
    debug!(next = state.current_player_index, "Killer visit ended");
}

/// Advance past eliminated seats, at most once round the table.
fn skip_eliminated(state: &mut GameState) {
    for _ in 0..state.players.len() {
        if state.current_player().is_some_and(|p| !p.is_eliminated) {
            return;
        }
        state.advance_turn();
    }
}

/// Re-derive the table after a roster change: replay, award the game to a
/// lone survivor, and move play off an eliminated seat.
pub(crate) fn settle_after_removal(state: &mut GameState) {
    replay(state);
    check_winner(state);
    if !state.is_active() {
        return;
    }
    if state.current_player().is_some_and(|p| p.is_eliminated) {
        state.current_throw.clear();
        skip_eliminated(state);
    }
}

pub(crate) fn check_winner(state: &mut GameState) {
    let alive: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_eliminated)
        .map(|(i, _)| i)
        .collect();
    if alive.len() == 1 && alive.len() < state.players.len() {
        commit_pending(state);
        info!(winner = state.players[alive[0]].id, "Last player standing");
        state.finish(Some(alive[0]));
    }
}

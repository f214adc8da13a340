//! X01 countdown: entry/out rules, busts, legs, sets and match win.

use tracing::{debug, info};

use crate::domain::action::Action;
use crate::domain::notation::Dart;
use crate::domain::options::{DartRule, X01Options};
use crate::domain::player::{Visit, VisitOutcome};
use crate::domain::rules::wins_required;
use crate::domain::score::dart_or_miss;
use crate::domain::state::{next_index, GameState, LoggedVisit};
use crate::domain::variant::VariantRules;

pub struct X01Rules;

impl VariantRules for X01Rules {
    fn start(&self, state: &mut GameState) {
        let starting = state.options.starting_score;
        for player in &mut state.players {
            player.score = starting;
        }
        state.leg_starter_index = 0;
        state.current_player_index = 0;
    }

    fn apply(&self, state: &mut GameState, action: &Action) {
        match action {
            Action::AddDart { notation } => {
                state.current_throw.add_dart(notation.as_str());
            }
            Action::RemoveDart => {
                state.current_throw.remove_last_dart();
            }
            Action::SubmitThrow => submit_visit(state),
            Action::EndTurn => {
                if state.current_throw.is_empty() {
                    state.advance_turn();
                } else {
                    submit_visit(state);
                }
            }
            Action::UndoScore => undo_last_visit(state),
            other => debug!(action = other.name(), "Action not used by X01"),
        }
    }
}

/// Classify a visit without touching state.
///
/// `entered` is whether the player has already scored in this leg; the entry
/// rule only gates players who have not.
pub fn resolve_visit(
    score_before: u32,
    darts: &[Dart],
    options: &X01Options,
    entered: bool,
) -> VisitOutcome {
    let points: u32 = darts.iter().map(|d| d.value()).sum();

    if options.entry_mode != DartRule::Straight
        && !entered
        && points > 0
        && !darts.iter().any(|d| options.entry_mode.accepts(*d))
    {
        return VisitOutcome::Voided;
    }

    let remaining = score_before as i64 - points as i64;
    if remaining < 0 || remaining == 1 {
        return VisitOutcome::Bust;
    }
    if remaining == 0 {
        let finisher = darts.iter().rev().find(|d| d.value() > 0);
        return match finisher {
            Some(dart) if options.out_mode.accepts(*dart) => VisitOutcome::Checkout,
            _ => VisitOutcome::Bust,
        };
    }
    VisitOutcome::Scored
}

/// Commit the buffered visit for the current player.
pub fn submit_visit(state: &mut GameState) {
    if !state.is_active() || state.current_throw.is_empty() {
        return;
    }
    let index = state.current_player_index;
    let darts = state.current_throw.take();
    let parsed: Vec<Dart> = darts.iter().map(|d| dart_or_miss(d)).collect();
    let points: u32 = parsed.iter().map(|d| d.value()).sum();
    let options = state.options.clone();

    let Some(player) = state.players.get_mut(index) else {
        return;
    };
    let score_before = player.score;
    let outcome = resolve_visit(score_before, &parsed, &options, player.has_entered());
    debug!(player.id, score_before, points, outcome = ?outcome, "Submitting X01 visit");

    let counted = match outcome {
        VisitOutcome::Scored | VisitOutcome::Checkout => points,
        VisitOutcome::Bust | VisitOutcome::Voided => 0,
    };
    player.score = score_before - counted;
    player.throws.push(Visit {
        darts: darts.clone(),
        score_before,
        points: counted,
        outcome,
    });
    if outcome == VisitOutcome::Checkout {
        player.legs_won += 1;
    }
    player.refresh_stats();
    state.visit_log.push(LoggedVisit {
        player_index: index,
        darts,
        turn: state.current_turn,
    });

    if outcome == VisitOutcome::Checkout {
        leg_won(state, index);
    } else {
        state.advance_turn();
    }
}

fn leg_won(state: &mut GameState, index: usize) {
    let options = state.options.clone();
    let legs_needed = wins_required(options.format, options.legs);
    let Some(player) = state.players.get_mut(index) else {
        return;
    };
    info!(player.id, legs_won = player.legs_won, legs_needed, "Leg won");
    if player.legs_won < legs_needed {
        start_next_leg(state);
        return;
    }

    player.sets_won += 1;
    let sets_won = player.sets_won;
    let player_id = player.id;
    for p in &mut state.players {
        p.legs_won = 0;
    }
    let sets_needed = wins_required(options.format, options.sets);
    info!(player_id, sets_won, sets_needed, "Set won");

    if options.sets <= 1 || sets_won >= sets_needed {
        info!(player_id, "Match won");
        state.finish(Some(index));
    } else {
        start_next_leg(state);
    }
}

fn start_next_leg(state: &mut GameState) {
    let starting = state.options.starting_score;
    for player in &mut state.players {
        player.start_new_leg(starting);
        player.refresh_stats();
    }
    state.leg_starter_index = next_index(state.leg_starter_index, state.players.len());
    state.current_player_index = state.leg_starter_index;
    state.current_turn = 1;
    state.current_throw.clear();
    state.visit_log.clear();
    debug!(leg_starter = state.leg_starter_index, "Next leg");
}

/// Revert the most recent visit of the current leg.
///
/// Visits are undone in commit order, so a seat that passed without
/// throwing is skipped over. Visits from finished legs cannot be reverted.
pub fn undo_last_visit(state: &mut GameState) {
    if !state.is_active() {
        return;
    }
    let Some(logged) = state.visit_log.pop() else {
        debug!("Nothing to undo in this leg");
        return;
    };
    let Some(player) = state.players.get_mut(logged.player_index) else {
        return;
    };
    let Some(visit) = player.throws.pop() else {
        return;
    };
    player.score = visit.score_before;
    player.refresh_stats();
    debug!(player.id, restored = visit.score_before, "Undid X01 visit");

    state.current_throw.clear();
    state.current_player_index = logged.player_index;
    state.current_turn = logged.turn.max(1);
}

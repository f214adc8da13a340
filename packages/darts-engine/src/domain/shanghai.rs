//! Shanghai: one shared target segment per round, 1 through 9.

use tracing::{debug, info};

use crate::domain::action::Action;
use crate::domain::notation::Multiplier;
use crate::domain::player::{Player, Visit};
use crate::domain::rules::SHANGHAI_LAST_SEGMENT;
use crate::domain::score::dart_or_miss;
use crate::domain::state::GameState;
use crate::domain::variant::VariantRules;

pub struct ShanghaiRules;

impl VariantRules for ShanghaiRules {
    fn start(&self, state: &mut GameState) {
        for player in &mut state.players {
            player.shanghai_segment_scores = (1..=SHANGHAI_LAST_SEGMENT).map(|s| (s, 0)).collect();
        }
        state.shanghai_segment = 1;
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
            Action::SubmitThrow => {
                if !state.current_throw.is_empty() {
                    end_visit(state);
                }
            }
            Action::EndTurn => end_visit(state),
            other => debug!(action = other.name(), "Action not used by Shanghai"),
        }
    }
}

/// Score the pending darts against the round's segment and pass the turn.
fn end_visit(state: &mut GameState) {
    if !state.is_active() {
        return;
    }
    let index = state.current_player_index;
    let target = state.shanghai_segment;
    let darts = state.current_throw.take();
    let Some(player) = state.players.get_mut(index) else {
        return;
    };

    let before = player.shanghai_total();
    let mut points = 0;
    for dart in darts.iter().map(|d| dart_or_miss(d)) {
        match dart.multiplier() {
            Some(Multiplier::Single) => player.singles_hit += 1,
            Some(Multiplier::Double) => player.doubles_hit += 1,
            Some(Multiplier::Triple) => player.triples_hit += 1,
            None => {}
        }
        if dart.segment() == Some(target) {
            points += dart.value();
        }
    }
    *player.shanghai_segment_scores.entry(target).or_insert(0) += points;
    player.score = player.shanghai_total();
    if !darts.is_empty() {
        player.throws.push(Visit::scored(darts, before, points));
    }
    debug!(player.id, target, points, "Shanghai visit scored");

    let last_in_round = index + 1 >= state.players.len();
    if last_in_round && target >= SHANGHAI_LAST_SEGMENT {
        let winner = shanghai_winner(&state.players);
        info!(winner = ?winner.map(|i| state.players[i].id), "Shanghai complete");
        state.finish(winner);
        return;
    }
    if last_in_round {
        state.shanghai_segment += 1;
    }
    state.advance_turn();
}

/// Highest total wins. Ties go to the player who scored on more segments,
/// then to the earlier seat.
pub fn shanghai_winner(players: &[Player]) -> Option<usize> {
    let segments_scored =
        |p: &Player| p.shanghai_segment_scores.values().filter(|&&v| v > 0).count();
    players
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| {
            a.shanghai_total()
                .cmp(&b.shanghai_total())
                .then(segments_scored(a).cmp(&segments_scored(b)))
                .then(ib.cmp(ia))
        })
        .map(|(i, _)| i)
}

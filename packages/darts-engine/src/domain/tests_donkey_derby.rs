use proptest::prelude::*;

use crate::domain::action::Action;
use crate::domain::dispatch::apply;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::test_gens::{dart_on, proptest_config};
use crate::domain::test_state_helpers::{derby_game, enter};

fn dart(state: &mut GameState, notation: &str) {
    apply(state, &Action::add_dart(notation));
}

#[test]
fn progress_clamps_and_wins_mid_visit() {
    let mut state = derby_game(&[4, 5], 10);
    state.players[0].donkey_progress = 9;
    dart(&mut state, "D4");

    assert_eq!(state.players[0].donkey_progress, 10);
    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.winner, Some(1));
    assert_eq!(state.players[0].wins, 1);
    assert!(state.current_throw.is_empty());

    dart(&mut state, "S4");
    assert_eq!(state.players[0].donkey_progress, 10, "no play after the finish");
}

#[test]
fn opponents_get_knocked_back_to_zero_at_most() {
    let mut state = derby_game(&[4, 5], 10);
    enter(&mut state, &["T4", "S5"]);
    apply(&mut state, &Action::SubmitThrow);
    assert_eq!(state.players[0].donkey_progress, 3);
    assert_eq!(state.players[1].donkey_progress, 0);

    dart(&mut state, "D4");
    assert_eq!(state.players[0].donkey_progress, 1);
    dart(&mut state, "T4");
    assert_eq!(state.players[0].donkey_progress, 0);
}

#[test]
fn removing_a_dart_rewinds_progress() {
    let mut state = derby_game(&[4, 5], 10);
    enter(&mut state, &["T4", "D4"]);
    assert_eq!(state.players[0].donkey_progress, 5);
    apply(&mut state, &Action::RemoveDart);
    assert_eq!(state.players[0].donkey_progress, 3);
    apply(&mut state, &Action::EndTurn);

    dart(&mut state, "T4");
    assert_eq!(state.players[0].donkey_progress, 0);
    apply(&mut state, &Action::RemoveDart);
    assert_eq!(state.players[0].donkey_progress, 3, "knockback undone exactly");
}

#[test]
fn unowned_segments_and_bulls_do_nothing() {
    let mut state = derby_game(&[4, 5], 10);
    enter(&mut state, &["T20", "Bull", "Miss"]);
    assert!(state.players.iter().all(|p| p.donkey_progress == 0));
    assert!(state.current_throw.is_complete());
}

#[test]
fn removing_a_rival_drops_their_knockbacks() {
    let mut state = derby_game(&[1, 2], 3);
    enter(&mut state, &["S1", "S1"]);
    apply(&mut state, &Action::SubmitThrow);
    enter(&mut state, &["S1"]);
    apply(&mut state, &Action::SubmitThrow);
    assert_eq!(state.players[0].donkey_progress, 1);

    dart(&mut state, "S1");
    assert_eq!(state.players[0].donkey_progress, 2);
    apply(&mut state, &Action::RemovePlayer { id: 2 });

    assert_eq!(state.players[0].donkey_progress, 3);
    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.winner, Some(1));
    let last = state.visit_log.last().map(|v| v.darts.clone());
    assert_eq!(last, Some(vec!["S1".to_string()]));
}

#[test]
fn removing_the_current_player_passes_the_turn() {
    let mut state = derby_game(&[1, 2, 3], 10);
    enter(&mut state, &["T1"]);
    apply(&mut state, &Action::SubmitThrow);
    dart(&mut state, "S1");
    assert_eq!(state.players[0].donkey_progress, 2);

    apply(&mut state, &Action::RemovePlayer { id: 2 });
    assert_eq!(state.status, GameStatus::Active);
    assert_eq!(state.current_player().map(|p| p.id), Some(3));
    assert!(state.current_throw.is_empty());
    assert_eq!(state.players[0].donkey_progress, 3, "pending knockback dropped");
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_progress_stays_on_the_track(
        throws in prop::collection::vec((dart_on(vec![4, 5, 6, 7]), any::<bool>()), 1..80),
        finish_line in 1u32..=12,
    ) {
        let mut state = derby_game(&[4, 5, 6], finish_line);
        for (notation, end_turn) in &throws {
            dart(&mut state, notation);
            if *end_turn {
                apply(&mut state, &Action::EndTurn);
            }
            for player in &state.players {
                prop_assert!(player.donkey_progress <= finish_line);
            }
            let finished = state.players.iter().filter(|p| p.donkey_progress == finish_line).count();
            if state.status == GameStatus::Complete {
                prop_assert!(finished >= 1);
                break;
            }
            prop_assert_eq!(finished, 0);
        }
    }
}

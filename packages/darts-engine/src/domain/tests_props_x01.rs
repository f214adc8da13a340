//! Property tests for X01 visit resolution (pure domain).
//!
//! - An empty submit never moves score or seat
//! - Busts leave the score where it was
//! - Under double out, zero is only reached on a double (or Bull)
//! - Scores never go negative

use proptest::prelude::*;

use crate::domain::action::Action;
use crate::domain::dispatch::apply;
use crate::domain::options::X01Options;
use crate::domain::player::VisitOutcome;
use crate::domain::score::dart_or_miss;
use crate::domain::state::GameStatus;
use crate::domain::test_gens::{any_notation, proptest_config, visit as any_visit};
use crate::domain::test_state_helpers::{visit, x01_game};

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_empty_submit_is_idempotent(
        visits in prop::collection::vec(any_visit(), 0..6),
    ) {
        let mut state = x01_game(2, X01Options::default());
        for darts in &visits {
            let darts: Vec<&str> = darts.iter().map(String::as_str).collect();
            visit(&mut state, &darts);
        }
        let before = state.clone();
        apply(&mut state, &Action::SubmitThrow);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_bust_keeps_score(
        start in 2u32..=180,
        darts in any_visit(),
    ) {
        let mut state = x01_game(1, X01Options::default());
        state.players[0].score = start;
        let points: u32 = darts.iter().map(|d| dart_or_miss(d).value()).sum();
        let darts: Vec<&str> = darts.iter().map(String::as_str).collect();
        visit(&mut state, &darts);

        let player = &state.players[0];
        let naive = start as i64 - points as i64;
        if naive < 0 || naive == 1 {
            prop_assert_eq!(player.score, start);
            prop_assert_eq!(player.throws[0].outcome, VisitOutcome::Bust);
        }
        prop_assert!(player.score <= start);
    }

    #[test]
    fn prop_double_out_only_finishes_on_a_double(
        start in 2u32..=170,
        darts in any_visit(),
    ) {
        let mut state = x01_game(1, X01Options::default());
        state.players[0].score = start;
        let parsed: Vec<_> = darts.iter().map(|d| dart_or_miss(d)).collect();
        let darts: Vec<&str> = darts.iter().map(String::as_str).collect();
        visit(&mut state, &darts);

        let finisher = parsed.iter().rev().find(|d| d.value() > 0);
        if state.status == GameStatus::Complete {
            prop_assert!(finisher.is_some_and(|d| d.is_double()));
            prop_assert_eq!(state.players[0].score, 0);
        } else {
            prop_assert_eq!(state.winner, None);
            prop_assert!(state.players[0].score > 0);
        }
    }

    #[test]
    fn prop_junk_notation_scores_zero_or_its_number(token in any_notation()) {
        let value = dart_or_miss(&token).value();
        if let Ok(n) = token.parse::<u32>() {
            prop_assert_eq!(value, n);
        } else {
            prop_assert!(value <= 60);
        }
    }
}

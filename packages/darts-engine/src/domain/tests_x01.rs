use crate::domain::action::Action;
use crate::domain::dispatch::apply;
use crate::domain::options::{DartRule, MatchFormat, X01Options};
use crate::domain::player::VisitOutcome;
use crate::domain::state::GameStatus;
use crate::domain::test_state_helpers::{enter, visit, x01_game};

fn double_out() -> X01Options {
    X01Options::default()
}

#[test]
fn opening_visit_counts_down() {
    let mut state = x01_game(1, double_out());
    visit(&mut state, &["T20", "T20", "D20"]);

    let player = &state.players[0];
    assert_eq!(player.score, 341);
    assert_eq!(player.throws.len(), 1);
    assert_eq!(player.throws[0].outcome, VisitOutcome::Scored);
    assert_eq!(state.status, GameStatus::Active);
    assert_eq!(state.winner, None);
    assert_eq!(state.current_turn, 2, "solo play wraps every visit");
}

#[test]
fn empty_submit_changes_nothing() {
    let mut state = x01_game(2, double_out());
    visit(&mut state, &["S20"]);
    let before = state.clone();
    apply(&mut state, &Action::SubmitThrow);
    assert_eq!(state, before);
}

#[test]
fn overshoot_and_one_left_are_busts() {
    let mut state = x01_game(1, double_out());
    state.players[0].score = 41;

    visit(&mut state, &["T20"]);
    assert_eq!(state.players[0].score, 41);

    visit(&mut state, &["D20"]);
    assert_eq!(state.players[0].score, 41, "leaving 1 is a bust");

    let outcomes: Vec<_> = state.players[0].throws.iter().map(|v| v.outcome).collect();
    assert_eq!(outcomes, vec![VisitOutcome::Bust, VisitOutcome::Bust]);
    assert!(state.players[0].throws.iter().all(|v| v.points == 0));
}

#[test]
fn finishing_on_a_single_busts_under_double_out() {
    let mut state = x01_game(1, double_out());
    state.players[0].score = 40;
    visit(&mut state, &["S20", "S20"]);
    assert_eq!(state.players[0].score, 40);
    assert_eq!(state.status, GameStatus::Active);
    assert_eq!(state.winner, None);
}

#[test]
fn finishing_on_a_double_wins_the_match() {
    let mut state = x01_game(2, double_out());
    state.players[0].score = 40;
    visit(&mut state, &["D20"]);

    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.winner, Some(1));
    assert_eq!(state.players[0].wins, 1);
    assert_eq!(state.players[0].score, 0);
    assert_eq!(state.session.games_played, 1);
    assert!(state.current_throw.is_empty());
}

#[test]
fn bull_finishes_and_trailing_miss_is_ignored() {
    let mut state = x01_game(1, double_out());
    state.players[0].score = 50;
    visit(&mut state, &["Bull", "Miss"]);
    assert_eq!(state.status, GameStatus::Complete);
}

#[test]
fn straight_out_accepts_any_finish() {
    let options = X01Options {
        out_mode: DartRule::Straight,
        ..double_out()
    };
    let mut state = x01_game(1, options);
    state.players[0].score = 20;
    visit(&mut state, &["S20"]);
    assert_eq!(state.status, GameStatus::Complete);
}

#[test]
fn master_out_accepts_trebles() {
    let options = X01Options {
        out_mode: DartRule::Master,
        ..double_out()
    };
    let mut state = x01_game(1, options.clone());
    state.players[0].score = 60;
    visit(&mut state, &["T20"]);
    assert_eq!(state.status, GameStatus::Complete);

    let mut state = x01_game(1, options);
    state.players[0].score = 25;
    visit(&mut state, &["Outer"]);
    assert_eq!(state.players[0].score, 25);
}

#[test]
fn double_in_voids_until_a_double_lands() {
    let options = X01Options {
        entry_mode: DartRule::Double,
        ..double_out()
    };
    let mut state = x01_game(2, options);

    visit(&mut state, &["T20", "S20"]);
    assert_eq!(state.players[0].score, 501);
    assert_eq!(state.players[0].throws[0].outcome, VisitOutcome::Voided);
    assert_eq!(state.current_player_index, 1, "turn passes after a voided visit");

    visit(&mut state, &["S5", "D10"]);
    assert_eq!(state.players[1].score, 476);

    visit(&mut state, &["Miss"]);
    assert_eq!(state.players[0].score, 501);
    visit(&mut state, &["S1"]);
    // The second player is in; their singles now count.
    visit(&mut state, &["S20"]);
    assert_eq!(state.players[0].score, 501);
    visit(&mut state, &["S20"]);
    assert_eq!(state.players[1].score, 455);
}

#[test]
fn legs_rotate_the_starter_and_reset_scores() {
    let options = X01Options {
        legs: 3,
        ..double_out()
    };
    let mut state = x01_game(2, options);
    state.players[0].score = 40;
    visit(&mut state, &["D20"]);

    assert_eq!(state.status, GameStatus::Active);
    assert_eq!(state.players[0].legs_won, 1);
    assert!(state.players.iter().all(|p| p.score == 501 && p.throws.is_empty()));
    assert_eq!(state.players[0].completed_legs.len(), 1);
    assert_eq!(state.leg_starter_index, 1);
    assert_eq!(state.current_player_index, 1);
    assert_eq!(state.current_turn, 1);

    visit(&mut state, &["S1"]);
    state.players[0].score = 32;
    visit(&mut state, &["D16"]);
    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.winner, Some(1));
    assert_eq!(state.players[0].sets_won, 1);
    assert_eq!(state.players[0].stats.checkouts_completed, 2);
    assert_eq!(state.players[0].stats.best_leg, Some(1));
}

#[test]
fn sets_reset_legs_and_first_to_needs_the_full_count() {
    let options = X01Options {
        format: MatchFormat::FirstTo,
        legs: 1,
        sets: 2,
        ..double_out()
    };
    let mut state = x01_game(2, options);
    state.players[0].score = 40;
    visit(&mut state, &["D20"]);
    assert_eq!(state.players[0].sets_won, 1);
    assert_eq!(state.players[0].legs_won, 0);
    assert_eq!(state.status, GameStatus::Active);

    // Player 2 opens the second set.
    assert_eq!(state.current_player_index, 1);
    state.players[1].score = 40;
    visit(&mut state, &["D20"]);
    assert_eq!(state.players[1].sets_won, 1);

    state.players[0].score = 2;
    visit(&mut state, &["D1"]);
    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.winner, Some(1));
}

#[test]
fn undo_restores_score_history_and_seat() {
    let mut state = x01_game(2, double_out());
    visit(&mut state, &["T20", "T20", "T20"]);
    visit(&mut state, &["S1"]);
    assert_eq!((state.current_player_index, state.current_turn), (0, 2));
    enter(&mut state, &["T19"]);

    apply(&mut state, &Action::UndoScore);
    assert_eq!(state.players[1].score, 501);
    assert!(state.players[1].throws.is_empty());
    assert_eq!((state.current_player_index, state.current_turn), (1, 1));
    assert!(state.current_throw.is_empty());

    apply(&mut state, &Action::UndoScore);
    assert_eq!(state.players[0].score, 501);
    assert_eq!(state.players[0].stats.darts_thrown, 0);
    assert_eq!(state.players[0].stats.highest_score, 0);
    assert_eq!((state.current_player_index, state.current_turn), (0, 1));

    let before = state.clone();
    apply(&mut state, &Action::UndoScore);
    assert_eq!(state, before, "nothing left to undo");
}

#[test]
fn undo_skips_seats_that_passed_without_throwing() {
    let mut state = x01_game(2, double_out());
    visit(&mut state, &["T20"]);
    visit(&mut state, &["S5"]);
    apply(&mut state, &Action::EndTurn);
    assert_eq!((state.current_player_index, state.current_turn), (1, 2));

    apply(&mut state, &Action::UndoScore);
    assert_eq!(state.players[0].score, 441, "first player's visit stays");
    assert_eq!(state.players[1].score, 501);
    assert!(state.players[1].throws.is_empty());
    assert_eq!((state.current_player_index, state.current_turn), (1, 1));
}

#[test]
fn undo_stops_at_the_start_of_the_leg() {
    let mut state = x01_game(2, X01Options {
        legs: 3,
        ..double_out()
    });
    state.players[0].score = 40;
    visit(&mut state, &["D20"]);
    assert_eq!(state.players[0].legs_won, 1);
    assert!(state.visit_log.is_empty());

    let before = state.clone();
    apply(&mut state, &Action::UndoScore);
    assert_eq!(state, before);
}

#[test]
fn stats_follow_history() {
    let mut state = x01_game(1, double_out());
    visit(&mut state, &["T20", "T20", "T20"]);
    visit(&mut state, &["S20", "S20", "S20"]);
    let stats = &state.players[0].stats;
    assert_eq!(stats.darts_thrown, 6);
    assert_eq!(stats.highest_score, 180);
    assert!((stats.average - 120.0).abs() < f64::EPSILON);
}

#[test]
fn end_turn_submits_pending_darts_or_passes() {
    let mut state = x01_game(2, double_out());
    enter(&mut state, &["S20"]);
    apply(&mut state, &Action::EndTurn);
    assert_eq!(state.players[0].score, 481);
    assert_eq!(state.current_player_index, 1);

    apply(&mut state, &Action::EndTurn);
    assert_eq!(state.players[1].score, 501);
    assert_eq!(state.current_player_index, 0);
}

#[test]
fn buffer_holds_three_darts() {
    let mut state = x01_game(1, double_out());
    enter(&mut state, &["S1", "S2", "S3", "S4"]);
    assert_eq!(state.current_throw.darts(), ["S1", "S2", "S3"]);
    assert!(state.current_throw.is_complete());

    apply(&mut state, &Action::RemoveDart);
    assert!(!state.current_throw.is_complete());
    assert_eq!(state.current_throw.total(), 3);
}

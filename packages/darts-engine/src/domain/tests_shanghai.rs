use crate::domain::action::{Action, StartGame};
use crate::domain::dispatch::apply;
use crate::domain::options::GameType;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::test_state_helpers::{roster, start, visit};

fn shanghai(players: &[&str]) -> GameState {
    start(roster(players), StartGame::new(GameType::Shanghai))
}

#[test]
fn only_the_round_segment_scores() {
    let mut state = shanghai(&["Ann", "Bob"]);
    visit(&mut state, &["T1", "S2", "D1"]);

    let ann = &state.players[0];
    assert_eq!(ann.shanghai_segment_scores.get(&1), Some(&5));
    assert_eq!(ann.shanghai_segment_scores.get(&2), Some(&0));
    assert_eq!(ann.score, 5);
    assert_eq!((ann.singles_hit, ann.doubles_hit, ann.triples_hit), (1, 1, 1));
    assert_eq!(ann.throws[0].dart_count(), 3, "misses on other segments still count as darts");
}

#[test]
fn segment_advances_after_the_last_player() {
    let mut state = shanghai(&["Ann", "Bob"]);
    visit(&mut state, &["S1"]);
    assert_eq!(state.shanghai_segment, 1);
    visit(&mut state, &["S1"]);
    assert_eq!(state.shanghai_segment, 2);
    assert_eq!(state.current_player_index, 0);
    assert_eq!(state.current_turn, 2);
}

#[test]
fn end_turn_commits_even_an_empty_visit() {
    let mut state = shanghai(&["Ann", "Bob"]);
    apply(&mut state, &Action::SubmitThrow);
    assert_eq!(state.current_player_index, 0, "empty submit is ignored");
    apply(&mut state, &Action::EndTurn);
    assert_eq!(state.current_player_index, 1);
}

#[test]
fn game_ends_after_round_nine_with_highest_total() {
    let mut state = shanghai(&["Ann", "Bob"]);
    for segment in 1..=9u8 {
        let ann = format!("S{segment}");
        let bob = format!("D{segment}");
        visit(&mut state, &[ann.as_str()]);
        visit(&mut state, &[bob.as_str()]);
    }
    assert_eq!(state.status, GameStatus::Complete);
    assert_eq!(state.players[0].shanghai_total(), 45);
    assert_eq!(state.players[1].shanghai_total(), 90);
    assert_eq!(state.winner, Some(2));
    assert_eq!(state.players[1].wins, 1);
}

#[test]
fn tie_goes_to_more_segments_then_earlier_seat() {
    let mut state = shanghai(&["Ann", "Bob", "Cat"]);
    for segment in 1..=9u8 {
        let (ann, bob, cat) = match segment {
            // Ann and Cat both finish on 18 over two segments; Bob 18 on one.
            3 => ("T3", "Miss", "T3"),
            9 => ("S9", "D9", "S9"),
            _ => ("Miss", "Miss", "Miss"),
        };
        visit(&mut state, &[ann]);
        visit(&mut state, &[bob]);
        visit(&mut state, &[cat]);
    }
    assert_eq!(state.status, GameStatus::Complete);
    assert!(state.players.iter().all(|p| p.shanghai_total() == 18));
    assert_eq!(state.winner, Some(1));
}

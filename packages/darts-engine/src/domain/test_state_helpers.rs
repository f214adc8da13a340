//! Test-only game builders for domain unit tests.

use crate::domain::action::{Action, StartGame};
use crate::domain::dispatch::apply;
use crate::domain::options::{DonkeyDerbyOptions, GameType, KillerOptions, X01Options};
use crate::domain::state::GameState;

/// Roster of `names` in setup.
pub fn roster(names: &[&str]) -> GameState {
    let mut state = GameState::new();
    for name in names {
        apply(&mut state, &Action::add_player(*name));
    }
    state
}

pub fn start(mut state: GameState, start: StartGame) -> GameState {
    apply(&mut state, &Action::StartGame(start));
    assert!(state.is_active(), "game failed to start");
    state
}

pub fn x01_game(players: usize, options: X01Options) -> GameState {
    let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    start(
        roster(&names),
        StartGame {
            options: Some(options),
            ..StartGame::new(GameType::X01)
        },
    )
}

/// Killer game with fixed segments instead of the seeded draw.
pub fn killer_game(segments: &[u8], max_hits: u32) -> GameState {
    let names: Vec<String> = (0..segments.len()).map(|i| format!("P{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut state = start(
        roster(&names),
        StartGame {
            killer_options: Some(KillerOptions { max_hits }),
            seed: Some(7),
            ..StartGame::new(GameType::Killer)
        },
    );
    for (player, segment) in state.players.iter_mut().zip(segments) {
        player.segment = Some(*segment);
    }
    state
}

/// Donkey Derby game with fixed segments.
pub fn derby_game(segments: &[u8], finish_line: u32) -> GameState {
    let names: Vec<String> = (0..segments.len()).map(|i| format!("P{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut state = start(
        roster(&names),
        StartGame {
            donkey_derby_options: Some(DonkeyDerbyOptions { finish_line }),
            seed: Some(7),
            ..StartGame::new(GameType::DonkeyDerby)
        },
    );
    for (player, segment) in state.players.iter_mut().zip(segments) {
        player.segment = Some(*segment);
    }
    state
}

/// Enter `darts` for the current player without submitting.
pub fn enter(state: &mut GameState, darts: &[&str]) {
    for dart in darts {
        apply(state, &Action::add_dart(*dart));
    }
}

/// Enter `darts` and submit them as one visit.
pub fn visit(state: &mut GameState, darts: &[&str]) {
    enter(state, darts);
    apply(state, &Action::SubmitThrow);
}

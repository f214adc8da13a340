#![allow(dead_code)]

// tests/common/mod.rs
use darts_engine::domain::{Action, GameType, StartGame};
use darts_engine::{GameEngine, StateSink};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::test_logging::init();
}

pub fn seat<S: StateSink>(engine: &mut GameEngine<S>, names: &[&str]) {
    for name in names {
        engine.dispatch(&Action::add_player(*name));
    }
}

pub fn start<S: StateSink>(engine: &mut GameEngine<S>, start: StartGame) {
    engine.dispatch(&Action::StartGame(start));
    assert!(engine.state().is_active(), "game failed to start");
}

pub fn start_x01<S: StateSink>(engine: &mut GameEngine<S>) {
    start(engine, StartGame::new(GameType::X01));
}

/// Enter and submit one visit.
pub fn throw<S: StateSink>(engine: &mut GameEngine<S>, darts: &[&str]) {
    for dart in darts {
        engine.dispatch(&Action::add_dart(*dart));
    }
    engine.dispatch(&Action::SubmitThrow);
}

//! In-memory game runner: bot throwers play a full game through the engine.

use std::collections::BTreeMap;

use darts_engine::domain::{Action, GameState, GameTransition, GameType, StartGame};
use darts_engine::{EngineConfig, GameEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::thrower::Thrower;

/// Final line for one player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerResult {
    pub name: String,
    pub thrower: String,
    pub score: u32,
    pub darts_thrown: u32,
    pub average: f64,
    pub checkouts: u32,
    pub legs_won: u32,
    pub sets_won: u32,
    pub is_eliminated: bool,
    pub players_eliminated: u32,
    pub shanghai_total: u32,
    pub donkey_progress: u32,
}

/// Result of simulating a complete game.
#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub game_id: u32,
    pub seed: u64,
    pub game_type: GameType,
    pub winner: Option<String>,
    pub visits: u32,
    pub rounds: u32,
    /// Transition events by kind.
    pub events: BTreeMap<&'static str, u32>,
    pub players: Vec<PlayerResult>,
}

#[derive(Debug)]
pub enum SimError {
    NotStarted,
    VisitCap(u32),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::NotStarted => write!(f, "game did not start"),
            SimError::VisitCap(cap) => write!(f, "no winner after {cap} visits"),
        }
    }
}

impl std::error::Error for SimError {}

pub struct Simulator {
    engine: GameEngine,
    game_type: GameType,
    seed: u64,
    game_id: u32,
    max_visits: u32,
}

impl Simulator {
    pub fn new(config: &EngineConfig, game_type: GameType, seed: u64, game_id: u32) -> Self {
        Self {
            engine: GameEngine::in_memory(GameState::with_config(config)),
            game_type,
            seed,
            game_id,
            max_visits: 2_000,
        }
    }

    pub fn with_max_visits(mut self, max_visits: u32) -> Self {
        self.max_visits = max_visits;
        self
    }

    pub fn simulate_game(
        mut self,
        throwers: &mut [Box<dyn Thrower>],
    ) -> Result<GameResult, SimError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut events: BTreeMap<&'static str, u32> = BTreeMap::new();

        for i in 0..throwers.len() {
            self.engine
                .dispatch(&Action::add_player(format!("Bot{}", i + 1)));
        }
        let start = StartGame {
            seed: Some(self.seed),
            ..StartGame::new(self.game_type)
        };
        record(&mut events, self.engine.dispatch(&Action::StartGame(start)));
        if !self.engine.state().is_active() {
            return Err(SimError::NotStarted);
        }

        let mut visits = 0;
        while self.engine.state().is_active() {
            if visits >= self.max_visits {
                return Err(SimError::VisitCap(self.max_visits));
            }
            let seat = self.engine.state().current_player_index;
            let thrower = &mut throwers[seat % throwers.len()];
            while visit_open(self.engine.state()) {
                let notation = thrower.throw(self.engine.state(), &mut rng);
                record(&mut events, self.engine.dispatch(&dart_action(self.game_type, notation)));
            }
            if self.engine.state().is_active() {
                record(&mut events, self.engine.dispatch(&Action::EndTurn));
            }
            visits += 1;
        }

        let state = self.engine.state();
        debug!(game_id = self.game_id, visits, winner = ?state.winner, "Simulated game");
        let winner = state
            .winner
            .and_then(|id| state.players.iter().find(|p| p.id == id))
            .map(|p| p.name.clone());
        let players = state
            .players
            .iter()
            .zip(throwers.iter())
            .map(|(p, t)| PlayerResult {
                name: p.name.clone(),
                thrower: t.name().to_string(),
                score: p.score,
                darts_thrown: p.stats.darts_thrown,
                average: p.stats.average,
                checkouts: p.stats.checkouts_completed,
                legs_won: p.legs_won,
                sets_won: p.sets_won,
                is_eliminated: p.is_eliminated,
                players_eliminated: p.players_eliminated,
                shanghai_total: p.shanghai_total(),
                donkey_progress: p.donkey_progress,
            })
            .collect();

        Ok(GameResult {
            game_id: self.game_id,
            seed: self.seed,
            game_type: self.game_type,
            winner,
            visits,
            rounds: state.current_turn,
            events,
            players,
        })
    }
}

/// Whether the current player keeps throwing. X01 players stop once the
/// pending darts finish or bust the leg.
fn visit_open(state: &GameState) -> bool {
    if !state.is_active() || state.current_throw.is_full() {
        return false;
    }
    match (state.game_type, state.current_player()) {
        (GameType::X01, Some(player)) => {
            i64::from(player.score) - i64::from(state.current_throw.total()) > 1
        }
        _ => true,
    }
}

fn dart_action(game_type: GameType, notation: String) -> Action {
    match game_type {
        GameType::Killer => Action::ProcessKillerDartHit { notation },
        _ => Action::AddDart { notation },
    }
}

fn record(events: &mut BTreeMap<&'static str, u32>, transitions: Vec<GameTransition>) {
    for transition in transitions {
        let kind = match transition {
            GameTransition::GameStarted { .. } => "game_started",
            GameTransition::TurnBecame { .. } => "turn_became",
            GameTransition::Bust { .. } => "bust",
            GameTransition::LegWon { .. } => "leg_won",
            GameTransition::SetWon { .. } => "set_won",
            GameTransition::BecameKiller { .. } => "became_killer",
            GameTransition::PlayerEliminated { .. } => "player_eliminated",
            GameTransition::GameEnded { .. } => "game_ended",
        };
        *events.entry(kind).or_insert(0) += 1;
    }
}

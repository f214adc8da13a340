//! Bot throwers: pick a target from the game state and land somewhere near it.

use darts_engine::domain::snapshot::GameSnapshot;
use darts_engine::domain::{Dart, GameState, GameType, Multiplier};
use rand::rngs::StdRng;
use rand::Rng;

/// Segments clockwise from the top of the board.
const BOARD_ORDER: [u8; 20] = [20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5];

pub trait Thrower {
    fn name(&self) -> &'static str;

    /// Notation of the next dart for the current player.
    fn throw(&mut self, state: &GameState, rng: &mut StdRng) -> String;
}

pub struct RandomThrower;

impl Thrower for RandomThrower {
    fn name(&self) -> &'static str {
        "random"
    }

    fn throw(&mut self, _state: &GameState, rng: &mut StdRng) -> String {
        match rng.random_range(0..100) {
            0..=1 => "Bull".to_string(),
            2..=4 => "Outer".to_string(),
            5..=9 => "Miss".to_string(),
            _ => {
                let ring = match rng.random_range(0..10) {
                    0 => 'D',
                    1 => 'T',
                    _ => 'S',
                };
                format!("{ring}{}", rng.random_range(1..=20))
            }
        }
    }
}

/// Hits the intended target with probability `accuracy`, otherwise strays
/// into a neighbouring bed or off the board.
pub struct AimedThrower {
    pub accuracy: f64,
}

impl Thrower for AimedThrower {
    fn name(&self) -> &'static str {
        "aimed"
    }

    fn throw(&mut self, state: &GameState, rng: &mut StdRng) -> String {
        let target = choose_target(state);
        if rng.random_bool(self.accuracy.clamp(0.0, 1.0)) {
            return target.to_string();
        }
        scatter(target, rng).to_string()
    }
}

fn choose_target(state: &GameState) -> Dart {
    let Some(player) = state.current_player() else {
        return Dart::triple(20);
    };
    match state.game_type {
        GameType::X01 => GameSnapshot::from_state(state)
            .turn
            .and_then(|turn| turn.checkout)
            .and_then(|advice| advice.darts().first().cloned())
            .and_then(|token| token.parse().ok())
            .unwrap_or(Dart::triple(20)),
        GameType::Shanghai => Dart::triple(state.shanghai_segment),
        GameType::DonkeyDerby => player.segment.map(Dart::triple).unwrap_or(Dart::Bull),
        GameType::Killer => {
            let own = player.segment.unwrap_or(20);
            if !player.is_killer {
                return Dart::double(own);
            }
            state
                .players
                .iter()
                .filter(|p| p.id != player.id && !p.is_eliminated)
                .min_by_key(|p| p.segment_hits)
                .and_then(|p| p.segment)
                .map(Dart::double)
                .unwrap_or(Dart::double(own))
        }
    }
}

fn scatter(target: Dart, rng: &mut StdRng) -> Dart {
    let number = match target {
        Dart::Segment { number, .. } => number,
        Dart::Bull if rng.random_bool(0.6) => return Dart::Outer,
        Dart::Bull | Dart::Outer => return Dart::single(rng.random_range(1..=20)),
        Dart::Miss | Dart::Points(_) => return Dart::Miss,
    };
    let position = BOARD_ORDER.iter().position(|n| *n == number).unwrap_or(0);
    let neighbour = |offset: usize| BOARD_ORDER[(position + offset) % BOARD_ORDER.len()];
    match rng.random_range(0..10) {
        0..=3 => Dart::single(number),
        4..=5 => Dart::single(neighbour(1)),
        6..=7 => Dart::single(neighbour(BOARD_ORDER.len() - 1)),
        8 => match target.multiplier() {
            Some(Multiplier::Double) => Dart::Miss,
            _ => Dart::triple(neighbour(1)),
        },
        _ => Dart::Miss,
    }
}

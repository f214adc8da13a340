//! Shared types for the simulator.

use clap::ValueEnum;
use darts_engine::domain::GameType;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    /// CSV summary only.
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GameKind {
    X01,
    Killer,
    Shanghai,
    DonkeyDerby,
}

impl From<GameKind> for GameType {
    fn from(kind: GameKind) -> Self {
        match kind {
            GameKind::X01 => GameType::X01,
            GameKind::Killer => GameType::Killer,
            GameKind::Shanghai => GameType::Shanghai,
            GameKind::DonkeyDerby => GameType::DonkeyDerby,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThrowerKind {
    /// Uniform over the board.
    Random,
    /// Aims per variant and scatters around the target.
    Aimed,
}

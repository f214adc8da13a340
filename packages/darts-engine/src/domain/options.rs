//! Game type and per-variant option structs.

use serde::{Deserialize, Serialize};

use crate::domain::notation::Dart;

/// Active variant. Each one is handled by its own transition module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    #[default]
    X01,
    Killer,
    Shanghai,
    DonkeyDerby,
}

impl GameType {
    /// Variants that hand every player a board segment at start.
    pub fn assigns_segments(self) -> bool {
        matches!(self, GameType::Killer | GameType::DonkeyDerby)
    }
}

/// Dart required to open (entry) or close (out) an X01 leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DartRule {
    #[default]
    Straight,
    Double,
    /// Double or triple.
    Master,
}

impl DartRule {
    pub fn accepts(self, dart: Dart) -> bool {
        match self {
            DartRule::Straight => true,
            DartRule::Double => dart.is_double(),
            DartRule::Master => dart.is_double() || dart.is_triple(),
        }
    }
}

pub type EntryMode = DartRule;
pub type OutMode = DartRule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    #[default]
    BestOf,
    FirstTo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct X01Options {
    pub starting_score: u32,
    pub entry_mode: EntryMode,
    pub out_mode: OutMode,
    pub format: MatchFormat,
    pub legs: u32,
    /// `1` means sets are not in play: the first set won is the match.
    pub sets: u32,
}

impl Default for X01Options {
    fn default() -> Self {
        Self {
            starting_score: 501,
            entry_mode: DartRule::Straight,
            out_mode: DartRule::Double,
            format: MatchFormat::BestOf,
            legs: 1,
            sets: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KillerOptions {
    /// Own-segment hits needed to become a killer.
    pub max_hits: u32,
}

impl Default for KillerOptions {
    fn default() -> Self {
        Self { max_hits: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonkeyDerbyOptions {
    pub finish_line: u32,
}

impl Default for DonkeyDerbyOptions {
    fn default() -> Self {
        Self { finish_line: 10 }
    }
}

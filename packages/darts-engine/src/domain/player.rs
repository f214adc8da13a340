//! Players and their per-visit history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::stats::PlayerStats;

pub type PlayerId = u32;

/// How a committed visit was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitOutcome {
    /// Points counted (possibly zero).
    Scored,
    /// X01: the visit broke countdown legality; no points counted.
    Bust,
    /// X01: the visit finished the leg.
    Checkout,
    /// X01: entry rule not met; no points counted.
    Voided,
}

/// One committed visit (up to three darts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub darts: Vec<String>,
    /// Player's score when the visit started.
    pub score_before: u32,
    /// Points that actually counted.
    pub points: u32,
    pub outcome: VisitOutcome,
}

impl Visit {
    pub fn scored(darts: Vec<String>, score_before: u32, points: u32) -> Self {
        Self {
            darts,
            score_before,
            points,
            outcome: VisitOutcome::Scored,
        }
    }

    pub fn dart_count(&self) -> u32 {
        self.darts.len() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub colour: String,
    pub score: u32,
    /// Visits of the leg in progress.
    #[serde(default)]
    pub throws: Vec<Visit>,
    /// Visits of finished legs, one entry per leg, oldest first.
    #[serde(default)]
    pub completed_legs: Vec<Vec<Visit>>,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default)]
    pub legs_won: u32,
    #[serde(default)]
    pub sets_won: u32,
    /// Games won this session.
    #[serde(default)]
    pub wins: u32,

    // Killer / Donkey Derby
    #[serde(default)]
    pub segment: Option<u8>,
    #[serde(default)]
    pub is_killer: bool,
    #[serde(default)]
    pub segment_hits: i32,
    #[serde(default)]
    pub is_eliminated: bool,
    #[serde(default)]
    pub players_eliminated: u32,

    // Shanghai
    #[serde(default)]
    pub singles_hit: u32,
    #[serde(default)]
    pub doubles_hit: u32,
    #[serde(default)]
    pub triples_hit: u32,
    #[serde(default)]
    pub shanghai_segment_scores: BTreeMap<u8, u32>,

    #[serde(default)]
    pub donkey_progress: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, colour: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            colour: colour.into(),
            score: 0,
            throws: Vec::new(),
            completed_legs: Vec::new(),
            stats: PlayerStats::default(),
            legs_won: 0,
            sets_won: 0,
            wins: 0,
            segment: None,
            is_killer: false,
            segment_hits: 0,
            is_eliminated: false,
            players_eliminated: 0,
            singles_hit: 0,
            doubles_hit: 0,
            triples_hit: 0,
            shanghai_segment_scores: BTreeMap::new(),
            donkey_progress: 0,
        }
    }

    /// Clear everything a game touches; identity and session wins survive.
    pub fn reset_for_game(&mut self, starting_score: u32) {
        *self = Self {
            wins: self.wins,
            ..Self::new(self.id, std::mem::take(&mut self.name), std::mem::take(&mut self.colour))
        };
        self.score = starting_score;
    }

    /// Move the current leg into history and restart the countdown.
    pub fn start_new_leg(&mut self, starting_score: u32) {
        let finished = std::mem::take(&mut self.throws);
        self.completed_legs.push(finished);
        self.score = starting_score;
    }

    /// Killer / Donkey Derby fields back to their start-of-game values.
    pub fn reset_race_fields(&mut self) {
        self.is_killer = false;
        self.segment_hits = 0;
        self.is_eliminated = false;
        self.players_eliminated = 0;
        self.donkey_progress = 0;
    }

    /// X01 entry: true once any visit in the current leg has counted points.
    pub fn has_entered(&self) -> bool {
        self.throws.iter().any(|v| v.points > 0)
    }

    pub fn shanghai_total(&self) -> u32 {
        self.shanghai_segment_scores.values().sum()
    }

    pub fn refresh_stats(&mut self) {
        self.stats = PlayerStats::from_legs(
            self.completed_legs
                .iter()
                .map(Vec::as_slice)
                .chain(std::iter::once(self.throws.as_slice())),
        );
    }
}

//! Engine defaults loaded from `DARTS_*` environment variables.
//!
//! Every variable is optional. Missing or blank values keep the built-in
//! defaults (501, straight in, double out, best of 1 leg and 1 set, 3 killer
//! hits, finish line 10); values that do not parse are a configuration error.

use std::env;
use std::str::FromStr;

use crate::domain::options::{DartRule, DonkeyDerbyOptions, KillerOptions, MatchFormat, X01Options};
use crate::domain::state::GameState;
use crate::errors::EngineError;

pub const ENV_STARTING_SCORE: &str = "DARTS_STARTING_SCORE";
pub const ENV_ENTRY_MODE: &str = "DARTS_ENTRY_MODE";
pub const ENV_OUT_MODE: &str = "DARTS_OUT_MODE";
pub const ENV_MATCH_FORMAT: &str = "DARTS_MATCH_FORMAT";
pub const ENV_LEGS: &str = "DARTS_LEGS";
pub const ENV_SETS: &str = "DARTS_SETS";
pub const ENV_KILLER_MAX_HITS: &str = "DARTS_KILLER_MAX_HITS";
pub const ENV_FINISH_LINE: &str = "DARTS_FINISH_LINE";
pub const ENV_SEED: &str = "DARTS_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub x01: X01Options,
    pub killer: KillerOptions,
    pub donkey_derby: DonkeyDerbyOptions,
    /// Seed for the first game; later games derive theirs.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests, CLI overlays).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(v) = read(ENV_STARTING_SCORE) {
            config.x01.starting_score = parse_number(ENV_STARTING_SCORE, &v, 2)?;
        }
        if let Some(v) = read(ENV_ENTRY_MODE) {
            config.x01.entry_mode = parse_dart_rule(ENV_ENTRY_MODE, &v)?;
        }
        if let Some(v) = read(ENV_OUT_MODE) {
            config.x01.out_mode = parse_dart_rule(ENV_OUT_MODE, &v)?;
        }
        if let Some(v) = read(ENV_MATCH_FORMAT) {
            config.x01.format = parse_format(&v)?;
        }
        if let Some(v) = read(ENV_LEGS) {
            config.x01.legs = parse_number(ENV_LEGS, &v, 1)?;
        }
        if let Some(v) = read(ENV_SETS) {
            config.x01.sets = parse_number(ENV_SETS, &v, 1)?;
        }
        if let Some(v) = read(ENV_KILLER_MAX_HITS) {
            config.killer.max_hits = parse_number(ENV_KILLER_MAX_HITS, &v, 1)?;
        }
        if let Some(v) = read(ENV_FINISH_LINE) {
            config.donkey_derby.finish_line = parse_number(ENV_FINISH_LINE, &v, 1)?;
        }
        if let Some(v) = read(ENV_SEED) {
            config.seed = Some(parse_number(ENV_SEED, &v, 0)?);
        }
        Ok(config)
    }
}

impl GameState {
    /// Empty roster with the configured options in place.
    pub fn with_config(config: &EngineConfig) -> Self {
        let mut state = Self::new();
        state.options = config.x01.clone();
        state.killer_options = config.killer.clone();
        state.donkey_derby_options = config.donkey_derby.clone();
        if let Some(seed) = config.seed {
            state.seed = seed;
        }
        state
    }
}

fn parse_number<T>(key: &str, value: &str, min: T) -> Result<T, EngineError>
where
    T: FromStr + PartialOrd + std::fmt::Display + Copy,
{
    let parsed: T = value
        .parse()
        .map_err(|_| EngineError::config(format!("{key} must be a number, got {value:?}")))?;
    if parsed < min {
        return Err(EngineError::config(format!(
            "{key} must be at least {min}, got {parsed}"
        )));
    }
    Ok(parsed)
}

pub fn parse_dart_rule(key: &str, value: &str) -> Result<DartRule, EngineError> {
    match value.to_ascii_lowercase().as_str() {
        "straight" | "single" => Ok(DartRule::Straight),
        "double" => Ok(DartRule::Double),
        "master" => Ok(DartRule::Master),
        _ => Err(EngineError::config(format!(
            "{key} must be straight, double or master, got {value:?}"
        ))),
    }
}

pub fn parse_format(value: &str) -> Result<MatchFormat, EngineError> {
    match value.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
        "best_of" | "bestof" => Ok(MatchFormat::BestOf),
        "first_to" | "firstto" => Ok(MatchFormat::FirstTo),
        _ => Err(EngineError::config(format!(
            "{ENV_MATCH_FORMAT} must be best_of or first_to, got {value:?}"
        ))),
    }
}

//! Checkout advice for X01: what to aim at with the darts left in a visit.

use serde::{Deserialize, Serialize};

use crate::domain::checkout_table::{three_dart_route, two_dart_route};
use crate::domain::options::{DartRule, OutMode};
use crate::domain::rules::{is_no_outshot, DARTS_PER_VISIT, MAX_CHECKOUT};

/// Advice for the current remaining score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "darts", rename_all = "snake_case")]
pub enum Checkout {
    /// Nothing left to score.
    GameShot,
    /// Above the one-visit ceiling.
    NoCheckout,
    /// Within the ceiling but not finishable in three darts.
    NoOutshot,
    /// A full finishing route.
    Finish(Vec<String>),
    /// No finish with the darts left; aim here to leave a good finish.
    Setup(Vec<String>),
}

impl Checkout {
    pub fn darts(&self) -> &[String] {
        match self {
            Checkout::Finish(darts) | Checkout::Setup(darts) => darts,
            _ => &[],
        }
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, Checkout::Finish(_))
    }
}

/// Two-dart fallbacks: score with the first dart, finish with the second.
const ANCHORS: [(&str, u32); 9] = [
    ("T20", 60),
    ("T19", 57),
    ("T18", 54),
    ("T17", 51),
    ("T16", 48),
    ("T15", 45),
    ("S20", 20),
    ("S19", 19),
    ("Outer", 25),
];

/// Preferred leaves for a setup dart, best first.
const SETUP_LEAVES: [u32; 6] = [40, 32, 16, 8, 4, 2];

/// Suggests a checkout for `remaining` with `darts_remaining` darts left in
/// the visit. Zero (or more than three) darts is read as a fresh visit.
///
/// A score that one dart can finish under `out_mode` is returned as that
/// single dart before any table route is tried, so 60 under master out
/// suggests `["T20"]`.
pub fn suggest_checkout(remaining: i32, out_mode: OutMode, darts_remaining: usize) -> Checkout {
    if remaining <= 0 {
        return Checkout::GameShot;
    }
    let remaining = remaining as u32;
    if remaining > MAX_CHECKOUT {
        return Checkout::NoCheckout;
    }
    if is_no_outshot(remaining) {
        return Checkout::NoOutshot;
    }

    if let Some(dart) = finishing_dart(remaining, out_mode) {
        return Checkout::Finish(vec![dart]);
    }

    let darts = match darts_remaining {
        0 => DARTS_PER_VISIT,
        n => n.min(DARTS_PER_VISIT),
    };
    match darts {
        1 => setup(remaining),
        2 => two_dart_advice(remaining, out_mode),
        _ => three_dart_advice(remaining, out_mode),
    }
}

fn two_dart_advice(remaining: u32, out_mode: OutMode) -> Checkout {
    if let Some(route) = two_dart_route(remaining) {
        return Checkout::Finish(to_owned(route));
    }
    ANCHORS
        .iter()
        .filter(|(_, value)| *value < remaining)
        .find_map(|(anchor, value)| {
            finishing_dart(remaining - value, out_mode).map(|fin| vec![anchor.to_string(), fin])
        })
        .map(Checkout::Finish)
        .unwrap_or_else(|| setup(remaining))
}

fn three_dart_advice(remaining: u32, out_mode: OutMode) -> Checkout {
    if let Some(route) = three_dart_route(remaining) {
        return Checkout::Finish(to_owned(route));
    }
    if remaining % 2 == 1 {
        // Knock off a single to leave an even finish.
        let single = remaining.saturating_sub(40).clamp(1, 20);
        if let Some(rest) = finishing_dart(remaining - single, out_mode) {
            return Checkout::Finish(vec![format!("S{single}"), rest]);
        }
    } else if remaining <= 40 {
        return Checkout::Finish(vec![format!("D{}", remaining / 2)]);
    }
    match two_dart_advice(remaining, out_mode) {
        finish @ Checkout::Finish(_) => finish,
        _ => setup(remaining),
    }
}

fn setup(remaining: u32) -> Checkout {
    Checkout::Setup(vec![setup_dart(remaining)])
}

/// One dart that leaves a preferred double, or T20 when none does.
pub fn setup_dart(remaining: u32) -> String {
    SETUP_LEAVES
        .iter()
        .filter(|leave| **leave < remaining)
        .find_map(|leave| scoring_dart(remaining - leave))
        .unwrap_or_else(|| "T20".to_string())
}

/// A single dart that finishes exactly `value` under `out_mode`.
pub fn finishing_dart(value: u32, out_mode: OutMode) -> Option<String> {
    let double = match value {
        50 => Some("Bull".to_string()),
        2..=40 if value % 2 == 0 => Some(format!("D{}", value / 2)),
        _ => None,
    };
    match out_mode {
        DartRule::Double => double,
        DartRule::Master => double.or_else(|| treble(value)),
        DartRule::Straight => scoring_dart(value).or(double),
    }
}

/// Any single dart worth `value`, simplest ring first.
fn scoring_dart(value: u32) -> Option<String> {
    match value {
        1..=20 => Some(format!("S{value}")),
        25 => Some("Outer".to_string()),
        50 => Some("Bull".to_string()),
        _ => treble(value).or_else(|| {
            (value % 2 == 0 && value <= 40).then(|| format!("D{}", value / 2))
        }),
    }
}

fn treble(value: u32) -> Option<String> {
    (value % 3 == 0 && (3..=60).contains(&value)).then(|| format!("T{}", value / 3))
}

fn to_owned(route: &[&str]) -> Vec<String> {
    route.iter().map(|dart| dart.to_string()).collect()
}

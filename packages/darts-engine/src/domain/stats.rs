//! X01 statistics, always derived from the full visit history.
//!
//! Nothing here is updated incrementally: the engine calls
//! [`PlayerStats::from_legs`] after every visit and every undo, so the forward
//! and undo paths cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::domain::player::{Visit, VisitOutcome};
use crate::domain::rules::MAX_CHECKOUT;

/// Visits counted by the first-9 average.
const FIRST_NINE_VISITS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub darts_thrown: u32,
    pub total_score: u32,
    /// Three-dart average.
    pub average: f64,
    pub first_nine_average: f64,
    pub highest_score: u32,
    pub checkouts_completed: u32,
    /// Visits started on a score of 170 or less.
    pub checkout_attempts: u32,
    /// Percentage in `0.0..=100.0`.
    pub checkout_percentage: f64,
    /// Fewest darts used in a won leg.
    pub best_leg: Option<u32>,
    /// Most darts used in a won leg.
    pub worst_leg: Option<u32>,
}

fn three_dart_average(points: u32, darts: u32) -> f64 {
    if darts == 0 {
        return 0.0;
    }
    points as f64 / darts as f64 * 3.0
}

impl PlayerStats {
    /// Derive stats from every leg the player has thrown, oldest first.
    pub fn from_legs<'a, I>(legs: I) -> Self
    where
        I: IntoIterator<Item = &'a [Visit]>,
    {
        let mut stats = PlayerStats::default();
        let mut first_nine_points = 0u32;
        let mut first_nine_darts = 0u32;

        for leg in legs {
            for (i, visit) in leg.iter().enumerate() {
                stats.darts_thrown += visit.dart_count();
                stats.total_score += visit.points;
                stats.highest_score = stats.highest_score.max(visit.points);

                if i < FIRST_NINE_VISITS {
                    first_nine_points += visit.points;
                    first_nine_darts += visit.dart_count();
                }

                let attempt = visit.outcome != VisitOutcome::Voided
                    && visit.score_before > 0
                    && visit.score_before <= MAX_CHECKOUT;
                if attempt {
                    stats.checkout_attempts += 1;
                }
                if visit.outcome == VisitOutcome::Checkout {
                    stats.checkouts_completed += 1;
                }
            }

            let won = leg
                .last()
                .is_some_and(|v| v.outcome == VisitOutcome::Checkout);
            if won {
                let darts: u32 = leg.iter().map(Visit::dart_count).sum();
                stats.best_leg = Some(stats.best_leg.map_or(darts, |b| b.min(darts)));
                stats.worst_leg = Some(stats.worst_leg.map_or(darts, |w| w.max(darts)));
            }
        }

        stats.average = three_dart_average(stats.total_score, stats.darts_thrown);
        stats.first_nine_average = three_dart_average(first_nine_points, first_nine_darts);
        if stats.checkout_attempts > 0 {
            stats.checkout_percentage =
                stats.checkouts_completed as f64 / stats.checkout_attempts as f64 * 100.0;
        }
        stats
    }
}

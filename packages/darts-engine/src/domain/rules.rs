//! Fixed rule constants shared across variants.

use crate::domain::options::MatchFormat;

/// Darts in a single visit.
pub const DARTS_PER_VISIT: usize = 3;

/// Highest score that can be finished in one visit.
pub const MAX_CHECKOUT: u32 = 170;

/// Scores at or below the checkout ceiling that no three darts can finish.
pub const NO_OUTSHOT: [u32; 8] = [1, 159, 162, 163, 165, 166, 168, 169];

/// Numbered segments on the board.
pub const BOARD_SEGMENTS: u8 = 20;

/// Shanghai plays segments 1 through this value, one round each.
pub const SHANGHAI_LAST_SEGMENT: u8 = 9;

/// Killer: segment hits at or below this value eliminate a player.
pub const KILLER_ELIMINATION_HITS: i32 = -1;

pub fn is_no_outshot(remaining: u32) -> bool {
    NO_OUTSHOT.contains(&remaining)
}

/// Wins needed to take a leg-group (legs within a set, or sets within a match).
///
/// "Best of" needs a majority; "first to" needs the full count.
pub fn wins_required(format: MatchFormat, count: u32) -> u32 {
    match format {
        MatchFormat::BestOf => count.div_ceil(2).max(1),
        MatchFormat::FirstTo => count.max(1),
    }
}

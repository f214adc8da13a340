//! Deterministic segment assignment for Killer and Donkey Derby.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::BOARD_SEGMENTS;
use crate::domain::state::GameState;

/// Derive the next game's seed from the previous one.
///
/// Same previous seed and game count give the same result, so a recorded
/// action stream replays to identical segment draws.
pub fn derive_game_seed(previous_seed: u64, games_played: u32) -> u64 {
    previous_seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add((games_played as u64).wrapping_mul(1442695040888963407))
        .wrapping_add(1)
}

/// Draw `count` distinct segments from 1..=20.
///
/// Returns `None` when the board cannot give everyone their own segment.
pub fn assign_segments(count: usize, seed: u64) -> Option<Vec<u8>> {
    if count > BOARD_SEGMENTS as usize {
        return None;
    }
    let mut segments: Vec<u8> = (1..=BOARD_SEGMENTS).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    segments.shuffle(&mut rng);
    segments.truncate(count);
    Some(segments)
}

/// Hand every player their own segment using the game seed.
///
/// Leaves segments unset when the table is larger than the board; the
/// dispatcher refuses to start such games.
pub fn seat_segments(state: &mut GameState) {
    let Some(segments) = assign_segments(state.players.len(), state.seed) else {
        return;
    };
    for (player, segment) in state.players.iter_mut().zip(segments) {
        player.segment = Some(segment);
    }
}

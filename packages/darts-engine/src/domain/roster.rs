//! Roster edits: adding, removing and reordering players.

use tracing::debug;

use crate::domain::donkey_derby;
use crate::domain::killer;
use crate::domain::options::GameType;
use crate::domain::player::{Player, PlayerId};
use crate::domain::state::GameState;

/// Default colours, handed out by id.
pub const PALETTE: [&str; 8] = [
    "#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6", "#e67e22", "#1abc9c", "#ec407a",
];

pub fn palette_colour(id: PlayerId) -> &'static str {
    PALETTE[(id.saturating_sub(1) as usize) % PALETTE.len()]
}

/// Seat a new player. Ignored while a game is running or for a blank name.
pub fn add_player(state: &mut GameState, name: &str, colour: Option<&str>) {
    let name = name.trim();
    if state.is_active() || name.is_empty() {
        debug!(name, status = ?state.status, "Ignoring ADD_PLAYER");
        return;
    }
    let highest = state.players.iter().map(|p| p.id).max().unwrap_or(0);
    let id = state.next_player_id.max(highest + 1);
    state.next_player_id = id + 1;
    let colour = colour
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| palette_colour(id));
    let mut player = Player::new(id, name, colour);
    player.wins = state.session.player_wins.get(name).copied().unwrap_or(0);
    player.score = match state.game_type {
        GameType::X01 => state.options.starting_score,
        _ => 0,
    };
    debug!(player.id = id, name, "Player added");
    state.players.push(player);
}

/// Drop a player. During a game at least one player must remain; the seat
/// pointers and the replay log follow the removal.
pub fn remove_player(state: &mut GameState, id: PlayerId) {
    let Some(removed) = state.player_index(id) else {
        return;
    };
    if state.is_active() && state.players.len() <= 1 {
        debug!(player.id = id, "Ignoring removal of the last player in a running game");
        return;
    }

    let was_current = removed == state.current_player_index;
    state.players.remove(removed);
    let len = state.players.len();
    let shift = |index: usize| -> Option<usize> {
        match index.cmp(&removed) {
            std::cmp::Ordering::Less => Some(index),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(index - 1),
        }
    };

    // The next seat slides into the removed index.
    let wrap = |index: usize| if index >= len { 0 } else { index };
    state.current_player_index = wrap(shift(state.current_player_index).unwrap_or(removed));
    state.leg_starter_index = wrap(shift(state.leg_starter_index).unwrap_or(removed));
    state.visit_log.retain(|visit| visit.player_index != removed);
    for visit in &mut state.visit_log {
        if let Some(index) = shift(visit.player_index) {
            visit.player_index = index;
        }
    }
    if was_current {
        state.current_throw.clear();
    }
    debug!(player.id = id, remaining = len, "Player removed");

    if state.is_active() {
        rebuild_race_fields(state);
    }
}

/// Reorder the table. Ignored unless `ids` is a permutation of the roster.
pub fn set_player_order(state: &mut GameState, ids: &[PlayerId]) {
    let mut positions = Vec::with_capacity(ids.len());
    for id in ids {
        match state.player_index(*id) {
            Some(index) if !positions.contains(&index) => positions.push(index),
            _ => {
                debug!(?ids, "Ignoring SET_PLAYER_ORDER: not a permutation");
                return;
            }
        }
    }
    if positions.len() != state.players.len() {
        debug!(?ids, "Ignoring SET_PLAYER_ORDER: not a permutation");
        return;
    }

    // positions[new] = old
    let new_of = |old: usize| positions.iter().position(|p| *p == old).unwrap_or(old);
    state.current_player_index = new_of(state.current_player_index);
    state.leg_starter_index = new_of(state.leg_starter_index);
    for visit in &mut state.visit_log {
        visit.player_index = new_of(visit.player_index);
    }
    let mut old = std::mem::take(&mut state.players)
        .into_iter()
        .map(Some)
        .collect::<Vec<_>>();
    state.players = positions
        .iter()
        .filter_map(|index| old[*index].take())
        .collect();
    debug!(?ids, "Player order set");
}

fn rebuild_race_fields(state: &mut GameState) {
    match state.game_type {
        GameType::Killer => killer::settle_after_removal(state),
        GameType::DonkeyDerby => donkey_derby::settle_after_removal(state),
        GameType::X01 | GameType::Shanghai => {}
    }
}

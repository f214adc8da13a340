//! Action dispatcher: `(state, action) -> state`.
//!
//! Roster edits and the game lifecycle (start, end, reset) are handled here
//! for every variant. In-play actions reach the active variant's
//! [`VariantRules`] only while a game is running.

use tracing::{debug, info, warn};

use crate::domain::action::{Action, StartGame};
use crate::domain::options::{DonkeyDerbyOptions, GameType, KillerOptions, X01Options};
use crate::domain::player::PlayerId;
use crate::domain::roster;
use crate::domain::rules::BOARD_SEGMENTS;
use crate::domain::segments::derive_game_seed;
use crate::domain::state::{GameState, GameStatus};
use crate::domain::variant::{rules_for, VariantRules};

/// Pure transition: returns the next state, leaving `state` untouched.
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    apply(&mut next, action);
    next
}

/// In-place transition. Invalid actions leave the state unchanged.
pub fn apply(state: &mut GameState, action: &Action) {
    debug!(action = action.name(), status = ?state.status, "Dispatching action");
    match action {
        Action::AddPlayer { name, colour } => roster::add_player(state, name, colour.as_deref()),
        Action::RemovePlayer { id } => roster::remove_player(state, *id),
        Action::SetPlayerOrder { ids } => roster::set_player_order(state, ids),
        Action::StartGame(start) => start_game(state, start),
        Action::EndGame { winner } => end_game(state, *winner),
        Action::ResetGame => reset_game(state),
        in_play => {
            if state.is_active() {
                rules_for(state.game_type).apply(state, in_play);
            } else {
                debug!(action = in_play.name(), "No game running; action ignored");
            }
        }
    }
}

/// Fewest players a variant can start with.
pub fn min_players(game_type: GameType) -> usize {
    match game_type {
        GameType::Killer => 2,
        GameType::X01 | GameType::Shanghai | GameType::DonkeyDerby => 1,
    }
}

fn start_game(state: &mut GameState, start: &StartGame) {
    let players = state.players.len();
    if players < min_players(start.game_type) {
        warn!(players, game_type = ?start.game_type, "Not enough players to start");
        return;
    }
    if start.game_type.assigns_segments() && players > BOARD_SEGMENTS as usize {
        warn!(players, game_type = ?start.game_type, "More players than board segments");
        return;
    }

    state.game_type = start.game_type;
    if let Some(options) = &start.options {
        state.options = sanitize_x01(options.clone());
    }
    if let Some(options) = &start.killer_options {
        state.killer_options = KillerOptions {
            max_hits: options.max_hits.max(1),
        };
    }
    if let Some(options) = &start.donkey_derby_options {
        state.donkey_derby_options = DonkeyDerbyOptions {
            finish_line: options.finish_line.max(1),
        };
    }
    state.seed = start
        .seed
        .unwrap_or_else(|| derive_game_seed(state.seed, state.session.games_played));

    let starting_score = match state.game_type {
        GameType::X01 => state.options.starting_score,
        _ => 0,
    };
    for player in &mut state.players {
        player.reset_for_game(starting_score);
    }
    reset_table(state);
    state.status = GameStatus::Active;

    let rules: &dyn VariantRules = rules_for(state.game_type);
    rules.start(state);
    info!(game_type = ?state.game_type, players, seed = state.seed, "Game started");
}

pub(crate) fn sanitize_x01(mut options: X01Options) -> X01Options {
    options.starting_score = options.starting_score.max(2);
    options.legs = options.legs.max(1);
    options.sets = options.sets.max(1);
    options
}

fn end_game(state: &mut GameState, winner: Option<PlayerId>) {
    if !state.is_active() {
        return;
    }
    let winner_index = winner.and_then(|id| state.player_index(id));
    info!(winner = ?winner, "Game ended by host");
    state.finish(winner_index);
}

/// Back to setup with the same roster; identity, wins and session survive.
fn reset_game(state: &mut GameState) {
    let starting_score = match state.game_type {
        GameType::X01 => state.options.starting_score,
        _ => 0,
    };
    for player in &mut state.players {
        player.reset_for_game(starting_score);
    }
    reset_table(state);
    state.status = GameStatus::Setup;
    debug!(players = state.players.len(), "Game reset");
}

fn reset_table(state: &mut GameState) {
    state.current_player_index = 0;
    state.current_turn = 1;
    state.winner = None;
    state.leg_starter_index = 0;
    state.current_throw.clear();
    state.shanghai_segment = 1;
    state.visit_log.clear();
}

//! The persisted shape: the whole game while one is running, otherwise only
//! the session statistics.

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, SessionStats};
use crate::errors::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum PersistedState {
    ActiveGame(Box<GameState>),
    Session(SessionStats),
}

impl PersistedState {
    pub fn capture(state: &GameState) -> Self {
        if state.is_active() {
            PersistedState::ActiveGame(Box::new(state.clone()))
        } else {
            PersistedState::Session(state.session.clone())
        }
    }

    /// Back to a game state. A stored session yields an empty setup state
    /// carrying those statistics.
    pub fn restore(self) -> GameState {
        match self {
            PersistedState::ActiveGame(state) => *state,
            PersistedState::Session(session) => GameState {
                session,
                ..GameState::new()
            },
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Host-facing engine: owns the state, reduces actions, emits transition
//! events and hands the persisted shape to a sink.

use tracing::{debug, info, warn};

use crate::domain::action::Action;
use crate::domain::dispatch::reduce;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::persistence::PersistedState;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameState;
use crate::errors::EngineError;
use crate::sink::{NullSink, StateSink};

pub struct GameEngine<S: StateSink = NullSink> {
    state: GameState,
    sink: S,
}

impl GameEngine<NullSink> {
    pub fn in_memory(state: GameState) -> Self {
        Self::new(state, NullSink)
    }
}

impl<S: StateSink> GameEngine<S> {
    pub fn new(state: GameState, sink: S) -> Self {
        Self { state, sink }
    }

    /// Resume from whatever the sink last stored, or start from `fallback`.
    pub fn restore(sink: S, fallback: GameState) -> Result<Self, EngineError> {
        let state = match sink.load()? {
            Some(persisted) => {
                let state = persisted.restore();
                info!(status = ?state.status, players = state.players.len(), "Restored state");
                state
            }
            None => fallback,
        };
        Ok(Self { state, sink })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(&self.state)
    }

    /// Apply one action. Persistence runs after the state settles; a sink
    /// failure is logged and the new state is kept.
    pub fn dispatch(&mut self, action: &Action) -> Vec<GameTransition> {
        let next = reduce(&self.state, action);
        let transitions = derive_game_transitions(&self.state, &next);
        for transition in &transitions {
            debug!(action = action.name(), ?transition, "Game transition");
        }
        let changed = next != self.state;
        self.state = next;

        if changed {
            if let Err(err) = self.sink.persist(&PersistedState::capture(&self.state)) {
                warn!(error = %err, action = action.name(), "Failed to persist state");
            }
        }
        transitions
    }

    pub fn into_parts(self) -> (GameState, S) {
        (self.state, self.sink)
    }
}

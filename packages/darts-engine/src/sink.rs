//! State sink port: where the engine puts the persisted shape after each
//! transition.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::persistence::PersistedState;
use crate::errors::EngineError;

pub trait StateSink {
    fn persist(&mut self, state: &PersistedState) -> Result<(), EngineError>;

    /// Last persisted shape, if any.
    fn load(&self) -> Result<Option<PersistedState>, EngineError>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StateSink for NullSink {
    fn persist(&mut self, _state: &PersistedState) -> Result<(), EngineError> {
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>, EngineError> {
        Ok(None)
    }
}

/// Keeps the latest shape in memory and counts writes.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    latest: Option<PersistedState>,
    pub writes: usize,
}

impl MemorySink {
    pub fn latest(&self) -> Option<&PersistedState> {
        self.latest.as_ref()
    }
}

impl StateSink for MemorySink {
    fn persist(&mut self, state: &PersistedState) -> Result<(), EngineError> {
        self.latest = Some(state.clone());
        self.writes += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>, EngineError> {
        Ok(self.latest.clone())
    }
}

/// One JSON document on disk, replaced on every write.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateSink for JsonFileSink {
    fn persist(&mut self, state: &PersistedState) -> Result<(), EngineError> {
        let json = state.to_json()?;
        // Write beside the target, then rename over it.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>, EngineError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => PersistedState::from_json(&json).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

//! Pending darts of the active player's current visit.

use serde::{Deserialize, Serialize};

use crate::domain::rules::DARTS_PER_VISIT;
use crate::domain::score::sum_notations;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowBuffer {
    darts: Vec<String>,
    /// Set when the third dart lands; cleared by any removal.
    complete: bool,
}

impl ThrowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn darts(&self) -> &[String] {
        &self.darts
    }

    pub fn len(&self) -> usize {
        self.darts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.darts.len() >= DARTS_PER_VISIT
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn darts_remaining(&self) -> usize {
        DARTS_PER_VISIT.saturating_sub(self.darts.len())
    }

    pub fn total(&self) -> u32 {
        sum_notations(&self.darts)
    }

    /// Append a dart. Returns `false` (and changes nothing) when already full.
    pub fn add_dart(&mut self, notation: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        self.darts.push(notation.into());
        self.complete = self.darts.len() == DARTS_PER_VISIT;
        true
    }

    /// Pop the most recent dart, if any.
    pub fn remove_last_dart(&mut self) -> Option<String> {
        let popped = self.darts.pop()?;
        self.complete = false;
        Some(popped)
    }

    /// Empty the buffer, handing back what it held.
    pub fn take(&mut self) -> Vec<String> {
        self.complete = false;
        std::mem::take(&mut self.darts)
    }

    pub fn clear(&mut self) {
        self.darts.clear();
        self.complete = false;
    }
}

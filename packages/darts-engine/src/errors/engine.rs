//! Engine-level error type.
//!
//! Game transitions are total and never produce this error. It only covers
//! the fallible edges around them: strict notation parsing, configuration
//! loading, and the state sink.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A dart notation token could not be parsed strictly.
    #[error("parse dart: {0:?}")]
    ParseDart(String),

    /// An environment or CLI setting had an unusable value.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// State could not be encoded or decoded.
    #[error("persistence error: {0}")]
    Persistence(#[from] serde_json::Error),

    /// The state sink's storage failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    pub fn parse_dart(token: impl Into<String>) -> Self {
        Self::ParseDart(token.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

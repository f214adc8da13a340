//! Error handling for the darts engine.

pub mod engine;

pub use engine::EngineError;

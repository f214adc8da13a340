#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod sink;

pub use config::EngineConfig;
pub use engine::GameEngine;
pub use errors::EngineError;
pub use sink::{JsonFileSink, MemorySink, NullSink, StateSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}

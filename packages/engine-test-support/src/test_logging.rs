//! Test logging for the darts engine
//!
//! One-time `tracing` subscriber setup shared by unit tests (through the
//! engine's `ctor` hook) and integration tests (called explicitly).

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Variables consulted for the filter, first non-empty wins.
pub const FILTER_VARS: [&str; 3] = ["DARTS_TEST_LOG", "TEST_LOG", "RUST_LOG"];

/// Filter used when none of [`FILTER_VARS`] is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Log target of the engine crate.
pub const ENGINE_TARGET: &str = "darts_engine";

/// Initialize structured logging for tests.
///
/// Idempotent; safe to call from every test. A bare level such as `debug`
/// applies to the engine only and leaves dependencies at [`DEFAULT_FILTER`];
/// anything else is passed to `EnvFilter` as written.
///
/// ```bash
/// DARTS_TEST_LOG=debug cargo test -p darts-engine
/// TEST_LOG="darts_engine::domain::killer=trace" cargo test -p darts-engine
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = resolve_filter(|name| std::env::var(name).ok());
        let filter =
            EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time()
            .try_init()
            .ok();
    });
}

/// Filter directives from the environment, read through `lookup`.
pub fn resolve_filter(lookup: impl Fn(&str) -> Option<String>) -> String {
    let Some(raw) = FILTER_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
    else {
        return DEFAULT_FILTER.to_string();
    };

    if is_bare_level(&raw) {
        format!("{DEFAULT_FILTER},{ENGINE_TARGET}={}", raw.to_ascii_lowercase())
    } else {
        raw
    }
}

fn is_bare_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    )
}

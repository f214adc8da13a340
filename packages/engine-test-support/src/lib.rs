//! Engine test support utilities
//!
//! Shared helpers for the darts engine's unit and integration tests.

pub mod test_logging;

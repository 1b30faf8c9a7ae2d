//! Backend test support utilities
//!
//! Shared helpers for the scoring backend's integration tests. Currently this is
//! the unified, idempotent logging initialization used by every test binary.

pub mod logging;

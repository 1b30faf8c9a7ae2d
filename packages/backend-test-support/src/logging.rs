//! Unified test logging initialization
//!
//! One-time, race-safe subscriber installation shared by unit and integration
//! tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Safe to call from every test binary and every test. The filter is read from
/// `TEST_LOG`, then `RUST_LOG`, and defaults to `"warn"` so runs stay quiet.
///
/// ```bash
/// TEST_LOG=scoring_backend=debug cargo test -p scoring-backend
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert an error's detail contains `needle`, showing both on failure.
pub fn assert_detail_contains(err: &scoring_backend::AppError, needle: &str) {
    assert!(
        err.detail().contains(needle),
        "expected error detail to contain {needle:?}, got {:?} ({})",
        err.detail(),
        err.code()
    );
}

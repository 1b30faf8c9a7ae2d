// Shared proptest configuration for domain property tests.

use proptest::test_runner::Config;

/// Case count from `PROPTEST_CASES`, defaulting to 256.
pub fn proptest_config() -> Config {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(256);
    Config {
        cases,
        ..Config::default()
    }
}

//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging from `RUST_LOG`; later calls are no-ops
pub fn setup_logging() {
    let _ = env_logger::try_init();
}

/// Setup logging for test runs, captured by the test harness
pub fn setup_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

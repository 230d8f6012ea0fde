//! Tracing/logging setup shared by hosts, tests and benchmarks.
//!
//! The permissions crates only emit `tracing` events; installing a subscriber
//! is left to whoever owns the process.

/// Initialize process-wide logging (JSON, `RUST_LOG` or `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogFormat, init_for_tests, init_with};

//! Shared test utilities for chartcheck integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

/// Install a test-writer tracing subscriber once per harness binary.
///
/// Honours `RUST_LOG`; defaults to `chartcheck_validators=debug` so
/// `cargo test -- --nocapture` shows every validation.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chartcheck_validators=debug")),
        )
        .try_init();
}

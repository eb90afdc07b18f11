//! Integration test support for the sm9pair library
//!
//! Holds the GB/T 38635 reference vectors and the logging setup shared by the
//! integration tests under `tests/`.

pub mod vectors;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Route engine logs to the test harness. Later calls are no-ops.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init();
}

//! crates/logging/src/subscriber.rs
//! Global subscriber installation.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::Verbosity;

/// Builds the filter for `verbosity`, preferring `RUST_LOG` when it holds a
/// valid directive.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Installs a stderr `fmt` subscriber filtered by [`env_filter`].
///
/// Returns `true` when this call installed the subscriber and `false` when a
/// global subscriber was already set, so repeated calls are harmless.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(io::stderr)
        .with_target(verbosity >= Verbosity::Debug)
        .try_init()
        .is_ok()
}

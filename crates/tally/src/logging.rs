//! Tracing subscriber setup.
//!
//! Log output goes to stderr so it never interleaves with the lines
//! written by [`print_with_prefix`](crate::print_with_prefix).

use tracing_subscriber::EnvFilter;

/// Default filter directive when none is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. An invalid `filter` falls back
/// to [`DEFAULT_FILTER`]. Returns `false` if a global subscriber was already
/// installed, in which case nothing changes.
pub fn init(filter: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

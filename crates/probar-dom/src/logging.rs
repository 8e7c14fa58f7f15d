//! Logging setup for test binaries.
//!
//! The engine emits `debug!` events per evaluated assertion and `trace!`
//! events per resolution under the `probar_dom` target. Nothing is printed
//! until a subscriber is installed.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const ENV_LOG: &str = "PROBAR_DOM_LOG";

/// Filter used when neither `PROBAR_DOM_LOG` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "probar_dom=info";

/// Build the filter from `PROBAR_DOM_LOG`, then `RUST_LOG`, then the default
#[must_use]
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(ENV_LOG).ok(), std::env::var("RUST_LOG").ok())
}

fn filter_from(primary: Option<String>, fallback: Option<String>) -> EnvFilter {
    primary
        .or(fallback)
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a fmt subscriber writing to the test output.
///
/// Safe to call from every test; returns `false` if a global subscriber was
/// already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}

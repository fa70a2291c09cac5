//! Tracing subscriber setup.

use commons_core::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "info";

/// Builds the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Installs the global fmt subscriber.
///
/// Returns false when a subscriber was already installed.
pub fn init(settings: &LoggingSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_target(false)
        .try_init()
        .is_ok()
}

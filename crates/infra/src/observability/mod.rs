//! Tracing initialization for processes embedding the clients
//!
//! `RUST_LOG` wins when set; otherwise the configured level is the default
//! filter directive. Output is human readable unless JSON is requested.

use authz_domain::LoggingConfig;
use tracing_subscriber::EnvFilter;

fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = filter_for(config);

    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init()
    };

    installed.is_ok()
}

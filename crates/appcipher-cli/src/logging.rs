//! Diagnostic logging setup.
//!
//! Log lines go to stderr so stdout stays reserved for envelopes and JSON.
//! `APPCIPHER_LOG` takes an `EnvFilter` directive (`debug`,
//! `appcipher_core=trace`, ...) and overrides `[logging] level` from the
//! config file.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Build the filter from `APPCIPHER_LOG`, falling back to `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(default_level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to set global default subscriber");
    }
}

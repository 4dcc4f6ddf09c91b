//! Logging setup for the daihon binary.

use daihon_error::{ConfigError, DaihonResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable text
    pub json_logs: bool,
}

impl LoggingConfig {
    /// Configuration from the CLI verbosity switches.
    pub fn new(verbose: bool, json_logs: bool) -> Self {
        Self {
            log_level: if verbose { "debug" } else { "warn" }.to_string(),
            json_logs,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so generated text on stdout stays clean.
///
/// # Errors
///
/// Returns a `ConfigError` for an invalid filter or when a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> DaihonResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install logger: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_selects_level() {
        assert_eq!(LoggingConfig::new(true, false).log_level, "debug");
        assert_eq!(LoggingConfig::default().log_level, "warn");
    }
}

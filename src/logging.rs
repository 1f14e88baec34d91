//! Logging System
//!
//! Structured logging through `tracing`. Log lines always go to stderr so the
//! sorted output on stdout stays clean.

use std::env::{self, VarError};
use std::io::IsTerminal;

use crate::error::SortError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "MERGE_SORT_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Disable logging entirely
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    pub level: String,

    /// Enable colored output (default: only when stderr is a terminal)
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            color: std::io::stderr().is_terminal(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `MERGE_SORT_LOG` environment variable
/// 2. The passed configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), SortError> {
    let filter = build_env_filter(config)?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(config.color)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| SortError::Logging(e.to_string()))
}

/// Build environment filter from the environment or config
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, SortError> {
    resolve_filter(config, env::var(LOG_ENV_VAR))
}

/// The configured level is validated even when the environment overrides it.
fn resolve_filter(
    config: &LoggingConfig,
    env_value: Result<String, VarError>,
) -> Result<EnvFilter, SortError> {
    if !config.enabled {
        return Ok(EnvFilter::new("off"));
    }

    let configured = parse_level(&config.level)?;

    match env_value {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            SortError::Logging(format!("Invalid {} filter {:?}: {}", LOG_ENV_VAR, directives, e))
        }),
        Err(VarError::NotPresent) => Ok(configured),
        Err(e) => Err(SortError::Logging(format!("Invalid {}: {}", LOG_ENV_VAR, e))),
    }
}

fn parse_level(level: &str) -> Result<EnvFilter, SortError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(EnvFilter::new(level)),
        other => Err(SortError::Logging(format!("Invalid log level: {}", other))),
    }
}

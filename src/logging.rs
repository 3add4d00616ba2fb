//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so they never interleave with the menu on
//! stdout. Logging is off unless `ROSTER_LOG` holds a filter directive
//! (for example `roster=debug`).

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_VAR, LOG_FORMAT_VAR};
use std::env;
use std::io;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Full lines with target and source position
    Text,
    /// Single-line, no target
    Compact,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "compact" => LogFormat::Compact,
            _ => LogFormat::Text,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// Read `ROSTER_LOG` and `ROSTER_LOG_FORMAT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = LogConfig::default();
        LogConfig {
            filter: lookup(LOG_FILTER_VAR)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: lookup(LOG_FORMAT_VAR)
                .map(|f| LogFormat::from_name(&f))
                .unwrap_or(defaults.format),
        }
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|e| LogError::InvalidFilter {
        filter: config.filter.clone(),
        reason: e.to_string(),
    })?;

    match config.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_target(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| LogError::Init(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = LogConfig::from_lookup(|_| None);
        assert_eq!(config.filter, "off");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn test_reads_both_variables() {
        let config = LogConfig::from_lookup(|key| match key {
            "ROSTER_LOG" => Some("roster=debug".to_string()),
            "ROSTER_LOG_FORMAT" => Some("Compact".to_string()),
            _ => None,
        });
        assert_eq!(config.filter, "roster=debug");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_blank_filter_falls_back() {
        let config = LogConfig::from_lookup(|key| (key == "ROSTER_LOG").then(|| "  ".to_string()));
        assert_eq!(config.filter, "off");
    }

    #[test]
    fn test_rejects_bad_filter() {
        let config = LogConfig {
            filter: "roster=notalevel".to_string(),
            format: LogFormat::Text,
        };
        assert!(matches!(init(&config), Err(LogError::InvalidFilter { .. })));
    }
}

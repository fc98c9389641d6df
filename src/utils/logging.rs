//! Logging setup on top of tracing-subscriber

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::error::{ClipperError, ClipperResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Pretty,
    /// JSON format for structured logging
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "Invalid log format: {}. Valid formats: pretty, json",
                other
            )),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: &str, format: LogFormat) -> ClipperResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| ClipperError::Logging {
            message: format!("invalid log level '{}': {}", level, e),
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ClipperError::Logging {
        message: e.to_string(),
    })?;

    tracing::debug!("Logging initialized with level: {}", level);
    Ok(())
}

// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::errors::DomainError;
use crate::domain::rules::MAX_CLIP_SECONDS;
use crate::error::{ClipperError, ClipperResult};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CONFIG_FILE: &str = "clipper.toml";

/// Runtime configuration of the clipper
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClipperConfig {
    /// Base URL of the extraction service
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Where downloaded clips are written
    pub output_dir: PathBuf,
    pub max_clip_seconds: i64,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 300,
            poll_interval_ms: 1000,
            output_dir: PathBuf::from("."),
            max_clip_seconds: MAX_CLIP_SECONDS,
        }
    }
}

impl ClipperConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.api_base_url.trim().is_empty() {
            return Err(DomainError::Config("api_base_url cannot be empty".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(DomainError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(DomainError::Config(
                "poll_interval_ms must be positive".to_string(),
            ));
        }
        if self.max_clip_seconds <= 0 {
            return Err(DomainError::Config(
                "max_clip_seconds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    clipper: ClipperConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse the `[clipper]` table; missing keys fall back to defaults
    pub fn parse(content: &str, origin: &str) -> ClipperResult<ClipperConfig> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ClipperError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        Ok(file.clipper)
    }

    pub fn load(path: &Path) -> ClipperResult<ClipperConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| ClipperError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load `path` if given, otherwise `clipper.toml` when present, otherwise defaults
    pub fn load_or_default(path: Option<&Path>) -> ClipperResult<ClipperConfig> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::info!("Loading configuration from: {}", default_path.display());
                    Self::load(default_path)
                } else {
                    Ok(ClipperConfig::default())
                }
            }
        }
    }
}

//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::{ClipperConfig, TomlConfigAdapter};
use crate::error::ClipperResult;

pub const ENV_API_URL: &str = "CLIPPER_API_URL";
pub const ENV_OUTPUT_DIR: &str = "CLIPPER_OUTPUT_DIR";

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Build the effective configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(
    config_path: Option<&Path>,
    cli: &CliOverrides,
) -> ClipperResult<ClipperConfig> {
    let mut config = TomlConfigAdapter::load_or_default(config_path)?;
    apply_environment(&mut config, |key| std::env::var(key).ok());
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    info!(
        api_base_url = %config.api_base_url,
        output_dir = %config.output_dir.display(),
        "Configuration initialized"
    );
    Ok(config)
}

/// Apply environment variables, read through `lookup`
pub fn apply_environment<F>(config: &mut ClipperConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        info!("Found environment override: {} = {}", ENV_API_URL, url);
        config.api_base_url = url;
    }
    if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
        info!("Found environment override: {} = {}", ENV_OUTPUT_DIR, dir);
        config.output_dir = PathBuf::from(dir);
    }
}

pub fn apply_cli_overrides(config: &mut ClipperConfig, cli: &CliOverrides) {
    if let Some(url) = &cli.api_url {
        info!("CLI override: api_base_url = {}", url);
        config.api_base_url = url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        info!("CLI override: output_dir = {}", dir.display());
        config.output_dir = dir.clone();
    }
}

//! YT Clipper CLI
//!
//! Headless host for the clip download workflow.
//!
//! # Usage
//!
//! ```bash
//! clipper probe-url "https://youtu.be/dQw4w9WgXcQ"
//! clipper estimate --start 00:01:00 --end 00:01:30
//! clipper download --url "https://youtu.be/dQw4w9WgXcQ" --start 00:01:00 --end 00:01:30
//! clipper health --api-url http://localhost:8000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use yt_clipper::app::container::AppContainer;
use yt_clipper::cli::{commands, Cli, Commands};
use yt_clipper::config_initialization::{initialize_configuration, CliOverrides};
use yt_clipper::utils::logging::{init_logging, LogFormat};

/// Main entry point for the clipper CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format: LogFormat = cli.log_format.parse().map_err(anyhow::Error::msg)?;
    init_logging(&cli.log_level, format).context("Failed to initialize logging")?;

    info!("Starting YT Clipper");

    let out_dir = match &cli.command {
        Commands::Download(args) => args.out_dir.clone(),
        _ => None,
    };
    let overrides = CliOverrides {
        api_url: cli.api_url.clone(),
        output_dir: out_dir,
    };
    let config = initialize_configuration(cli.config.as_deref(), &overrides)
        .context("Failed to load configuration")?;

    // Execute the requested command
    match cli.command {
        Commands::ProbeUrl(args) => commands::probe_url(args)?,
        Commands::Estimate(args) => commands::estimate(args, config.max_clip_seconds)?,
        Commands::Download(args) => {
            let container = AppContainer::new(config).context("Failed to initialize")?;
            commands::download(&container, args).await?;
        }
        Commands::Health => {
            let container = AppContainer::new(config).context("Failed to initialize")?;
            commands::health(&container).await?;
        }
    }

    info!("YT Clipper completed successfully");
    Ok(())
}

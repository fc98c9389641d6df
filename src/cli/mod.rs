//! CLI module for the clipper
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// YT Clipper
///
/// Select a time range inside a publicly hosted video and download it as a clip
/// through the extraction service.
#[derive(Parser, Debug)]
#[command(name = "clipper")]
#[command(about = "YT Clipper - Download a time range of a video as a clip")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Log output format (pretty or json)
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: String,

    /// Path to a TOML config file (default: ./clipper.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the extraction service
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the video identifier of a URL
    ProbeUrl(args::ProbeUrlArgs),
    /// Show duration and estimated size of a time range
    Estimate(args::EstimateArgs),
    /// Download a clip through the extraction service
    Download(args::DownloadArgs),
    /// Check that the extraction service is reachable
    Health,
}

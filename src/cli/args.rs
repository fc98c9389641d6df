//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the probe-url command
#[derive(Args, Debug)]
pub struct ProbeUrlArgs {
    /// Video URL (watch?v=, youtu.be/, embed/ or v/ form)
    pub url: String,
}

/// Arguments for the estimate command
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Start time (HH:MM:SS)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM:SS)
    #[arg(short, long)]
    pub end: String,
}

/// Arguments for the download command
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Video URL
    #[arg(short, long)]
    pub url: String,

    /// Start time (HH:MM:SS)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM:SS)
    #[arg(short, long)]
    pub end: String,

    /// Directory the clip is saved to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

//! Command implementations

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use crate::app::clip_interactor::INVALID_URL_MESSAGE;
use crate::app::container::AppContainer;
use crate::cli::args::{DownloadArgs, EstimateArgs, ProbeUrlArgs};
use crate::domain::model::{ClipSelection, DownloadOutcome, TimeCode, VideoReference};
use crate::domain::rules::ClipValidator;

fn parse_bounds(start: &str, end: &str) -> Result<ClipSelection> {
    let start = TimeCode::parse(start).map_err(|e| anyhow!("Invalid start time: {}", e))?;
    let end = TimeCode::parse(end).map_err(|e| anyhow!("Invalid end time: {}", e))?;
    Ok(ClipSelection::with_bounds(start, end))
}

/// Execute the probe-url command
pub fn probe_url(args: ProbeUrlArgs) -> Result<()> {
    let reference =
        VideoReference::parse(args.url.trim()).ok_or_else(|| anyhow!(INVALID_URL_MESSAGE))?;
    println!("{}", reference.video_id);
    Ok(())
}

/// Execute the estimate command
pub fn estimate(args: EstimateArgs, max_clip_seconds: i64) -> Result<()> {
    let selection = parse_bounds(&args.start, &args.end)?;
    let duration = ClipValidator::validate_with_limit(&selection, max_clip_seconds)
        .map_err(|e| anyhow!("{}", e))?;

    println!("Duration: {}", duration);
    println!(
        "Estimated size: ~{} MB",
        ClipValidator::estimate_size_mb(duration.total_seconds)
    );
    Ok(())
}

/// Execute the download command
pub async fn download(container: &AppContainer, args: DownloadArgs) -> Result<()> {
    let url = args.url.trim();
    if VideoReference::parse(url).is_none() {
        bail!(INVALID_URL_MESSAGE);
    }
    let selection = parse_bounds(&args.start, &args.end)?;

    info!("Starting clip download");
    let outcome = container
        .orchestrator()
        .submit(url, &selection)
        .await
        .map_err(|e| anyhow!("{}", e))?;

    let status = outcome.status();
    match outcome {
        DownloadOutcome::Success { filename, .. } => {
            let path = container.config().output_dir.join(filename);
            println!("{}", status.text());
            println!("Saved to: {}", path.display());
            Ok(())
        }
        _ => bail!("{}", status.text()),
    }
}

/// Execute the health command
pub async fn health(container: &AppContainer) -> Result<()> {
    let extraction = container.extraction();
    let healthy = extraction
        .check_health()
        .await
        .with_context(|| format!("Cannot reach {}", extraction.base_url()))?;

    if !healthy {
        bail!("Extraction service at {} is unhealthy", extraction.base_url());
    }
    println!("Extraction service at {} is healthy", extraction.base_url());
    Ok(())
}

use std::sync::Arc;

use crate::adapters::{ClipperConfig, FsClipSink, HttpExtractionAdapter};
use crate::app::{ClipInteractor, ClipSelector, DownloadOrchestrator, PlayerSession};
use crate::error::ClipperResult;
use crate::ports::{ClipSink, ExtractionPort, PlayerFactory};

/// Wires configuration into concrete adapters and application services
pub struct AppContainer {
    config: ClipperConfig,
    extraction: Arc<HttpExtractionAdapter>,
    orchestrator: Arc<DownloadOrchestrator>,
}

impl AppContainer {
    pub fn new(config: ClipperConfig) -> ClipperResult<Self> {
        config.validate()?;

        let extraction = Arc::new(HttpExtractionAdapter::new(&config.api_base_url)?);
        let sink = Arc::new(FsClipSink::new(config.output_dir.clone()));
        let orchestrator = Arc::new(
            DownloadOrchestrator::new(
                Arc::clone(&extraction) as Arc<dyn ExtractionPort>,
                sink as Arc<dyn ClipSink>,
            )
            .with_timeout(config.request_timeout())
            .with_max_clip_seconds(config.max_clip_seconds),
        );

        Ok(Self {
            config,
            extraction,
            orchestrator,
        })
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    pub fn extraction(&self) -> Arc<HttpExtractionAdapter> {
        Arc::clone(&self.extraction)
    }

    pub fn orchestrator(&self) -> Arc<DownloadOrchestrator> {
        Arc::clone(&self.orchestrator)
    }

    /// Interactor for a host that embeds a player
    pub fn clip_interactor(&self, players: Arc<dyn PlayerFactory>) -> ClipInteractor {
        let session = PlayerSession::with_poll_interval(players, self.config.poll_interval());
        let selector = ClipSelector::new(self.config.max_clip_seconds);
        ClipInteractor::new(session, selector, self.orchestrator())
    }
}

// Clip interactor - Owns the video reference, player session, selection and status

use std::sync::Arc;

use tracing::{info, warn};

use crate::app::clip_selector::{ClipInfo, ClipSelector};
use crate::app::download_orchestrator::DownloadOrchestrator;
use crate::app::player_session::PlayerSession;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::PlayerEvent;

/// Step used by the skip back/forward controls
pub const SEEK_STEP_SECONDS: f64 = 10.0;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a YouTube URL";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube URL";

/// Interactor for the clip-and-download workflow
pub struct ClipInteractor {
    reference: Option<VideoReference>,
    session: PlayerSession,
    selector: ClipSelector,
    orchestrator: Arc<DownloadOrchestrator>,
    status: Option<StatusMessage>,
}

impl ClipInteractor {
    pub fn new(
        session: PlayerSession,
        selector: ClipSelector,
        orchestrator: Arc<DownloadOrchestrator>,
    ) -> Self {
        Self {
            reference: None,
            session,
            selector,
            orchestrator,
            status: None,
        }
    }

    /// Accept user-entered URL text and start a fresh session for it.
    ///
    /// An invalid URL leaves any current session untouched.
    pub fn submit_url(&mut self, text: &str) -> Result<&VideoReference, DomainError> {
        self.status = None;

        let trimmed = text.trim();
        let parsed = if trimmed.is_empty() {
            Err(EMPTY_URL_MESSAGE)
        } else {
            VideoReference::parse(trimmed).ok_or(INVALID_URL_MESSAGE)
        };

        let reference = match parsed {
            Ok(reference) => reference,
            Err(message) => {
                warn!(url = %trimmed, "{}", message);
                self.status = Some(StatusMessage::Error(message.to_string()));
                return Err(DomainError::InvalidUrl(message.to_string()));
            }
        };

        info!(video_id = %reference.video_id, "Video reference accepted");
        self.selector.reset();
        self.session.load(reference.video_id.clone());
        Ok(&*self.reference.insert(reference))
    }

    /// Forget the current video and tear the player down
    pub fn clear_video(&mut self) {
        self.session.teardown();
        self.selector.reset();
        self.reference = None;
        self.status = None;
    }

    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        self.session.handle_event(event);
    }

    pub fn play_pause(&mut self) -> Result<(), DomainError> {
        self.session.play_pause()
    }

    pub fn seek_relative(&mut self, delta_seconds: f64) -> Result<f64, DomainError> {
        self.session.seek_relative(delta_seconds)
    }

    pub fn seek_back(&mut self) -> Result<f64, DomainError> {
        self.seek_relative(-SEEK_STEP_SECONDS)
    }

    pub fn seek_forward(&mut self) -> Result<f64, DomainError> {
        self.seek_relative(SEEK_STEP_SECONDS)
    }

    pub fn mark_start(&mut self) -> Result<TimeCode, DomainError> {
        self.selector.mark_start(&self.session).cloned()
    }

    pub fn mark_end(&mut self) -> Result<TimeCode, DomainError> {
        self.selector.mark_end(&self.session).cloned()
    }

    pub fn clip_info(&self) -> Option<ClipInfo> {
        self.selector.info()
    }

    /// Download button gate
    pub fn can_download(&self) -> bool {
        self.reference.is_some()
            && self.selector.selection().is_complete()
            && self.orchestrator.can_submit()
    }

    /// Validate the selection, fetch the clip and record the resulting status
    pub async fn download(&mut self) -> Result<DownloadOutcome, DomainError> {
        if !self.orchestrator.can_submit() {
            return Err(DomainError::Busy);
        }
        self.status = None;

        let Some(reference) = self.reference.as_ref() else {
            self.status = Some(StatusMessage::Error(EMPTY_URL_MESSAGE.to_string()));
            return Err(DomainError::InvalidUrl(EMPTY_URL_MESSAGE.to_string()));
        };

        let result = self
            .orchestrator
            .submit(&reference.source_url, self.selector.selection())
            .await;

        match result {
            Ok(outcome) => {
                self.status = Some(outcome.status());
                self.orchestrator.acknowledge();
                Ok(outcome)
            }
            Err(DomainError::Busy) => Err(DomainError::Busy),
            Err(err) => {
                self.status = Some(StatusMessage::Error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn reference(&self) -> Option<&VideoReference> {
        self.reference.as_ref()
    }

    pub fn selection(&self) -> &ClipSelection {
        self.selector.selection()
    }

    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    pub fn position_display(&self) -> String {
        self.session.position_display()
    }
}

// Clip selector - Start/end picks captured from the player position

use tracing::{debug, info};

use crate::app::player_session::PlayerSession;
use crate::domain::errors::{DomainError, SelectionError};
use crate::domain::model::{ClipDuration, ClipSelection, TimeCode};
use crate::domain::rules::{ClipValidator, MAX_CLIP_SECONDS};

/// Duration and size readout for a complete selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipInfo {
    pub duration: ClipDuration,
    /// Only present for a positive duration
    pub estimated_size_mb: Option<i64>,
}

/// Holds the evolving selection for the current video
#[derive(Debug, Clone)]
pub struct ClipSelector {
    selection: ClipSelection,
    max_clip_seconds: i64,
}

impl Default for ClipSelector {
    fn default() -> Self {
        Self::new(MAX_CLIP_SECONDS)
    }
}

impl ClipSelector {
    pub fn new(max_clip_seconds: i64) -> Self {
        Self {
            selection: ClipSelection::new(),
            max_clip_seconds,
        }
    }

    /// Snapshot the player position as the start bound
    pub fn mark_start(&mut self, session: &PlayerSession) -> Result<&TimeCode, DomainError> {
        let code = TimeCode::from_seconds(session.capture_current_time()?);
        info!(start = %code, "Marked start");
        Ok(&*self.selection.start.insert(code))
    }

    /// Snapshot the player position as the end bound
    pub fn mark_end(&mut self, session: &PlayerSession) -> Result<&TimeCode, DomainError> {
        let code = TimeCode::from_seconds(session.capture_current_time()?);
        info!(end = %code, "Marked end");
        Ok(&*self.selection.end.insert(code))
    }

    pub fn validate(&self) -> Result<ClipDuration, SelectionError> {
        ClipValidator::validate_with_limit(&self.selection, self.max_clip_seconds)
    }

    /// `None` until both bounds are set
    pub fn info(&self) -> Option<ClipInfo> {
        let (start, end) = match (&self.selection.start, &self.selection.end) {
            (Some(start), Some(end)) => (start, end),
            _ => return None,
        };
        let duration = ClipDuration::between(start, end);
        let estimated_size_mb = (duration.total_seconds > 0)
            .then(|| ClipValidator::estimate_size_mb(duration.total_seconds));
        Some(ClipInfo {
            duration,
            estimated_size_mb,
        })
    }

    pub fn selection(&self) -> &ClipSelection {
        &self.selection
    }

    pub fn max_clip_seconds(&self) -> i64 {
        self.max_clip_seconds
    }

    pub fn reset(&mut self) {
        debug!("Clearing selection");
        self.selection.clear();
    }
}

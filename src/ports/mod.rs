// Ports - Interface definitions (contracts)

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Imperative surface of an embedded media player.
///
/// Calls are synchronous queries/commands; state changes come back as [`PlayerEvent`]s
/// delivered by the host to the owning session.
pub trait PlayerPort: Send {
    /// Live playback position in seconds
    fn get_current_time(&self) -> f64;

    /// Total length of the loaded video in seconds
    fn get_duration(&self) -> f64;

    fn play_video(&mut self);

    fn pause_video(&mut self);

    /// Absolute seek
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool);

    /// Release the underlying player. No other call is made afterwards.
    fn destroy(&mut self);
}

/// Creates a player bound to one video
pub trait PlayerFactory: Send + Sync {
    fn create(&self, video_id: &VideoId) -> Box<dyn PlayerPort>;
}

/// Playback signal reported by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSignal {
    Playing,
    /// Paused, ended, buffering, cued
    Other,
}

/// Events emitted by the embedded player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    Ready,
    StateChanged(PlaybackSignal),
}

/// Transport-level failure of the extraction call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-success status; body kept raw
    Rejected { status: u16, body: Vec<u8> },
    /// Lower-level timeout fired before the orchestrator's own deadline
    Timeout,
    /// Connection refused, DNS, reset, malformed response
    Network(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Rejected { status, body } => {
                write!(f, "HTTP {} ({} byte body)", status, body.len())
            }
            TransportError::Timeout => write!(f, "request timed out"),
            TransportError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Port for the remote extraction service
#[async_trait]
pub trait ExtractionPort: Send + Sync {
    /// Submit a clip request and return the binary video payload
    async fn request_clip(&self, request: &DownloadRequest) -> Result<Vec<u8>, TransportError>;
}

/// Port for persisting a downloaded clip (the "save file" step)
#[async_trait]
pub trait ClipSink: Send + Sync {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DomainError>;
}

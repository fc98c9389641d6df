//! YT Clipper Library
//!
//! Client-side clip selection and download orchestration: a player session state machine
//! over an embedded player, start/end capture and validation, and a single-flight download
//! against a remote extraction service.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::{DomainError, SelectionError};
pub use domain::identifier::{extract_video_id, is_valid_url};
pub use domain::model::{
    duration, format_time, parse_time, ClipDuration, ClipSelection, DownloadOutcome,
    DownloadRequest, FailureKind, StatusMessage, TimeCode, VideoId, VideoReference,
    MAX_TIME_SECONDS,
};
pub use domain::rules::{ClipValidator, MAX_CLIP_SECONDS};
pub use error::{ClipperError, ClipperResult};

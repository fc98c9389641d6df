// Domain models - Core types and data structures

use std::fmt;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Parse `HH:MM:SS` into whole seconds.
///
/// Exactly three colon-separated fields of ASCII digits are accepted. No range check is
/// applied to the minute or second fields, but the total must fit in [`MAX_TIME_SECONDS`].
pub fn parse_time(text: &str) -> Result<u64, DomainError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(DomainError::InvalidFormat(format!(
            "'{}' must be HH:MM:SS",
            text
        )));
    }

    let mut fields = [0u64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidFormat(format!(
                "'{}' must be HH:MM:SS",
                text
            )));
        }
        *slot = part
            .parse::<u64>()
            .map_err(|e| DomainError::InvalidFormat(format!("'{}': {}", text, e)))?;
    }

    fields[0]
        .checked_mul(3600)
        .and_then(|total| total.checked_add(fields[1].checked_mul(60)?))
        .and_then(|total| total.checked_add(fields[2]))
        .filter(|total| *total <= MAX_TIME_SECONDS)
        .ok_or_else(|| DomainError::InvalidFormat(format!("'{}' is out of range", text)))
}

/// Largest representable time, so any two times have a signed difference
pub const MAX_TIME_SECONDS: u64 = i64::MAX as u64;

fn signed_seconds(seconds: u64, text: &str) -> Result<i64, DomainError> {
    i64::try_from(seconds)
        .map_err(|_| DomainError::InvalidFormat(format!("'{}' is out of range", text)))
}

/// Render seconds as zero-padded `HH:MM:SS`, flooring any fraction
pub fn format_time(seconds: f64) -> String {
    let whole = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Signed distance between two time strings. Negative results are returned as-is.
pub fn duration(start: &str, end: &str) -> Result<ClipDuration, DomainError> {
    let start_seconds = signed_seconds(parse_time(start)?, start)?;
    let end_seconds = signed_seconds(parse_time(end)?, end)?;
    Ok(ClipDuration::from_total(end_seconds - start_seconds))
}

/// Duration split into display components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipDuration {
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl ClipDuration {
    /// Minutes are floored; seconds keep the sign of the total
    pub fn from_total(total_seconds: i64) -> Self {
        Self {
            minutes: total_seconds.div_euclid(60),
            seconds: total_seconds % 60,
            total_seconds,
        }
    }

    /// Signed span from `start` to `end`
    pub fn between(start: &TimeCode, end: &TimeCode) -> Self {
        // TimeCode keeps its seconds within MAX_TIME_SECONDS
        let start_seconds = i64::try_from(start.seconds()).unwrap_or(i64::MAX);
        let end_seconds = i64::try_from(end.seconds()).unwrap_or(i64::MAX);
        Self::from_total(end_seconds - start_seconds)
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s", self.minutes, self.seconds)
    }
}

/// A validated `HH:MM:SS` time string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeCode {
    text: String,
    seconds: u64,
}

impl TimeCode {
    /// Parse and keep the original text
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let seconds = parse_time(text)?;
        Ok(Self {
            text: text.to_string(),
            seconds,
        })
    }

    /// Snapshot a player position
    pub fn from_seconds(seconds: f64) -> Self {
        let text = format_time(seconds);
        let seconds = if seconds.is_finite() && seconds > 0.0 {
            (seconds.floor() as u64).min(MAX_TIME_SECONDS)
        } else {
            0
        };
        Self { text, seconds }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Filename-safe form, colons replaced by hyphens
    pub fn hyphenated(&self) -> String {
        self.text.replace(':', "-")
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Opaque 11-character video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    pub(crate) fn new_unchecked(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The URL a session was started from and the identifier extracted from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    pub source_url: String,
    pub video_id: VideoId,
}

/// Start/end picks; each bound is set by snapshotting the player position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipSelection {
    pub start: Option<TimeCode>,
    pub end: Option<TimeCode>,
}

impl ClipSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with both bounds already known (headless use)
    pub fn with_bounds(start: TimeCode, end: TimeCode) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// JSON body sent to the extraction service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub url: String,
    pub start_time: String,
    pub end_time: String,
}

impl DownloadRequest {
    /// Name of the saved artifact, e.g. `youtube-clip-00-01-00-to-00-01-30.mp4`
    pub fn filename(&self) -> String {
        format!(
            "youtube-clip-{}-to-{}.mp4",
            self.start_time.replace(':', "-"),
            self.end_time.replace(':', "-")
        )
    }
}

/// Failure classes surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ServerError,
    NetworkError,
    SaveError,
}

/// Result of one download attempt
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Success {
        bytes: Vec<u8>,
        duration: ClipDuration,
        filename: String,
    },
    Failure {
        kind: FailureKind,
        message: String,
    },
    TimedOut,
}

impl DownloadOutcome {
    pub const TIMEOUT_MESSAGE: &'static str =
        "Request timed out. The video might be too long or the server is busy.";

    /// User-facing status for this outcome
    pub fn status(&self) -> StatusMessage {
        match self {
            DownloadOutcome::Success { duration, .. } => StatusMessage::Success(format!(
                "Clip downloaded successfully! Duration: {}",
                duration
            )),
            DownloadOutcome::Failure { message, .. } => StatusMessage::Error(message.clone()),
            DownloadOutcome::TimedOut => StatusMessage::Error(Self::TIMEOUT_MESSAGE.to_string()),
        }
    }
}

/// The single message shown to the user at any time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Error(String),
    Success(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Error(text) | StatusMessage::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

#[cfg(test)]
mod tests;

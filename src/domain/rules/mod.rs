// Domain rules - Selection validation and derived values

use crate::domain::errors::*;
use crate::domain::model::*;

/// Longest clip the service accepts (45 minutes)
pub const MAX_CLIP_SECONDS: i64 = 2700;

/// Rough encoded size per minute of high quality video
pub const ESTIMATED_MB_PER_MINUTE: f64 = 8.0;

/// Business rules for a start/end selection
pub struct ClipValidator;

impl ClipValidator {
    /// Check a selection against the default maximum length
    pub fn validate(selection: &ClipSelection) -> Result<ClipDuration, SelectionError> {
        Self::validate_with_limit(selection, MAX_CLIP_SECONDS)
    }

    /// Check ordering and length; returns the derived duration on success
    pub fn validate_with_limit(
        selection: &ClipSelection,
        max_seconds: i64,
    ) -> Result<ClipDuration, SelectionError> {
        let (start, end) = Self::bounds(selection)?;
        Self::check_span(start, end, max_seconds)
    }

    fn bounds(selection: &ClipSelection) -> Result<(&TimeCode, &TimeCode), SelectionError> {
        match (&selection.start, &selection.end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(SelectionError::Incomplete),
        }
    }

    fn check_span(
        start: &TimeCode,
        end: &TimeCode,
        max_seconds: i64,
    ) -> Result<ClipDuration, SelectionError> {
        let duration = ClipDuration::between(start, end);
        if duration.total_seconds <= 0 {
            return Err(SelectionError::NonPositiveDuration);
        }
        if duration.total_seconds > max_seconds {
            return Err(SelectionError::TooLong {
                minutes: duration.minutes,
                seconds: duration.seconds,
            });
        }

        Ok(duration)
    }

    /// Advisory size estimate in megabytes; not used for validation
    pub fn estimate_size_mb(total_seconds: i64) -> i64 {
        (total_seconds as f64 / 60.0 * ESTIMATED_MB_PER_MINUTE).round() as i64
    }

    /// Build the outbound request from a selection that passed validation
    pub fn to_request(
        source_url: &str,
        selection: &ClipSelection,
        max_seconds: i64,
    ) -> Result<(DownloadRequest, ClipDuration), SelectionError> {
        let (start, end) = Self::bounds(selection)?;
        let duration = Self::check_span(start, end, max_seconds)?;
        Ok((
            DownloadRequest {
                url: source_url.to_string(),
                start_time: start.as_str().to_string(),
                end_time: end.as_str().to_string(),
            },
            duration,
        ))
    }
}

#[cfg(test)]
mod tests;

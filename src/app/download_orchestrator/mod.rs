// Download orchestrator - One in-flight extraction request at a time

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::*;
use crate::domain::rules::{ClipValidator, MAX_CLIP_SECONDS};
use crate::ports::{ClipSink, ExtractionPort, TransportError};

/// Hard upper bound on a single extraction request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to download clip. Please try again.";
/// Used when the service answered with JSON that carries no usable `detail`
pub const MISSING_DETAIL_MESSAGE: &str = "Failed to download clip";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// `Idle -> Submitting -> {Succeeded, Failed, TimedOut} -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
    TimedOut,
}

impl DownloadPhase {
    fn terminal_for(outcome: &DownloadOutcome) -> Self {
        match outcome {
            DownloadOutcome::Success { .. } => DownloadPhase::Succeeded,
            DownloadOutcome::Failure { .. } => DownloadPhase::Failed,
            DownloadOutcome::TimedOut => DownloadPhase::TimedOut,
        }
    }
}

/// Message for a rejected request.
///
/// A non-empty string `detail` is surfaced verbatim. Other JSON gets
/// [`MISSING_DETAIL_MESSAGE`]; a body that is not JSON (or is `null`) gets
/// [`GENERIC_FAILURE_MESSAGE`].
pub fn decode_error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) | Err(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        Ok(value) => value
            .get("detail")
            .and_then(Value::as_str)
            .filter(|detail| !detail.is_empty())
            .unwrap_or(MISSING_DETAIL_MESSAGE)
            .to_string(),
    }
}

/// Map a transport result onto the user-visible outcome classes
fn classify_transport_error(err: TransportError) -> DownloadOutcome {
    match err {
        TransportError::Rejected { status, body } => {
            let message = decode_error_detail(&body);
            warn!(status, %message, "Extraction service rejected the clip");
            DownloadOutcome::Failure {
                kind: FailureKind::ServerError,
                message,
            }
        }
        TransportError::Timeout => DownloadOutcome::TimedOut,
        TransportError::Network(reason) => {
            warn!(%reason, "Extraction request failed");
            DownloadOutcome::Failure {
                kind: FailureKind::NetworkError,
                message: NETWORK_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

/// Resets the phase if a submission future is dropped mid-flight
struct InFlight<'a> {
    phase: &'a Mutex<DownloadPhase>,
    armed: bool,
}

impl InFlight<'_> {
    fn finish(mut self, phase: DownloadPhase) {
        *lock(self.phase) = phase;
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            *lock(self.phase) = DownloadPhase::Idle;
        }
    }
}

fn lock(phase: &Mutex<DownloadPhase>) -> MutexGuard<'_, DownloadPhase> {
    phase.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives a validated selection through the extraction service and the clip sink
pub struct DownloadOrchestrator {
    extraction: Arc<dyn ExtractionPort>,
    sink: Arc<dyn ClipSink>,
    timeout: Duration,
    max_clip_seconds: i64,
    phase: Mutex<DownloadPhase>,
}

impl DownloadOrchestrator {
    pub fn new(extraction: Arc<dyn ExtractionPort>, sink: Arc<dyn ClipSink>) -> Self {
        Self {
            extraction,
            sink,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            max_clip_seconds: MAX_CLIP_SECONDS,
            phase: Mutex::new(DownloadPhase::Idle),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_clip_seconds(mut self, max_clip_seconds: i64) -> Self {
        self.max_clip_seconds = max_clip_seconds;
        self
    }

    pub fn phase(&self) -> DownloadPhase {
        *lock(&self.phase)
    }

    /// Submission gate: closed only while a request is in flight
    pub fn can_submit(&self) -> bool {
        self.phase() != DownloadPhase::Submitting
    }

    /// Mark a terminal phase as observed and return to `Idle`
    pub fn acknowledge(&self) {
        let mut phase = lock(&self.phase);
        if *phase != DownloadPhase::Submitting {
            *phase = DownloadPhase::Idle;
        }
    }

    /// Validate, issue exactly one request, and save the payload on success.
    ///
    /// Rejected with [`DomainError::Selection`] before any state change when the selection
    /// is invalid, and with [`DomainError::Busy`] while another submission is in flight.
    pub async fn submit(
        &self,
        source_url: &str,
        selection: &ClipSelection,
    ) -> Result<DownloadOutcome, DomainError> {
        let (request, duration) =
            ClipValidator::to_request(source_url, selection, self.max_clip_seconds)?;

        let in_flight = {
            let mut phase = lock(&self.phase);
            if *phase == DownloadPhase::Submitting {
                warn!("Rejecting clip submission while another is in flight");
                return Err(DomainError::Busy);
            }
            *phase = DownloadPhase::Submitting;
            InFlight {
                phase: &self.phase,
                armed: true,
            }
        };

        info!(
            url = %request.url,
            start = %request.start_time,
            end = %request.end_time,
            "Submitting clip request"
        );

        let outcome = match tokio::time::timeout(self.timeout, self.extraction.request_clip(&request))
            .await
        {
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Clip request timed out");
                DownloadOutcome::TimedOut
            }
            Ok(Err(err)) => classify_transport_error(err),
            Ok(Ok(bytes)) => self.save(&request, bytes, duration).await,
        };

        in_flight.finish(DownloadPhase::terminal_for(&outcome));
        Ok(outcome)
    }

    async fn save(
        &self,
        request: &DownloadRequest,
        bytes: Vec<u8>,
        duration: ClipDuration,
    ) -> DownloadOutcome {
        let filename = request.filename();
        match self.sink.save(&filename, &bytes).await {
            Ok(path) => {
                info!(path = %path.display(), size = bytes.len(), "Clip saved");
                DownloadOutcome::Success {
                    bytes,
                    duration,
                    filename,
                }
            }
            Err(e) => {
                error!("Failed to save clip {}: {}", filename, e);
                DownloadOutcome::Failure {
                    kind: FailureKind::SaveError,
                    message: e.to_string(),
                }
            }
        }
    }
}

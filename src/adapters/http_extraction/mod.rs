// HTTP extraction adapter - Talks to the remote clip service with reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::debug;

use crate::domain::model::DownloadRequest;
use crate::error::ClipperResult;
use crate::ports::{ExtractionPort, TransportError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("yt-clipper/", env!("CARGO_PKG_VERSION"));

/// Get default headers for requests
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("video/mp4, application/json;q=0.9"),
    );
    headers
}

fn map_send_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Extraction service client
pub struct HttpExtractionAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExtractionAdapter {
    /// Only a connect timeout is set here; the overall deadline belongs to the orchestrator
    pub fn new(base_url: &str) -> ClipperResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .default_headers(default_headers())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`; true when the service answers with a success status
    pub async fn check_health(&self) -> Result<bool, TransportError> {
        let response = self
            .client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(map_send_error)?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl ExtractionPort for HttpExtractionAdapter {
    async fn request_clip(&self, request: &DownloadRequest) -> Result<Vec<u8>, TransportError> {
        let url = self.endpoint("/clip");
        debug!(%url, "POST clip request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_send_error)?;
        debug!(status = status.as_u16(), size = body.len(), "Clip response received");

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
                body: body.to_vec(),
            })
        }
    }
}

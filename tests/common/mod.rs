//! Shared test doubles for the player, extraction service and clip sink
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use yt_clipper::ports::{
    ClipSink, ExtractionPort, PlayerFactory, PlayerPort, TransportError,
};
use yt_clipper::{DomainError, DownloadRequest, VideoId};

pub const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const VIDEO_ID: &str = "dQw4w9WgXcQ";

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    SeekTo(f64),
}

/// Observable state behind a mock player
#[derive(Debug, Default)]
pub struct PlayerProbe {
    pub video_id: String,
    pub position: Mutex<f64>,
    pub duration: f64,
    pub time_queries: AtomicUsize,
    pub calls_after_destroy: AtomicUsize,
    pub destroyed: AtomicBool,
    pub commands: Mutex<Vec<PlayerCommand>>,
}

impl PlayerProbe {
    pub fn set_position(&self, seconds: f64) {
        *self.position.lock().unwrap() = seconds;
    }

    pub fn time_queries(&self) -> usize {
        self.time_queries.load(Ordering::SeqCst)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub fn commands(&self) -> Vec<PlayerCommand> {
        self.commands.lock().unwrap().clone()
    }

    fn touch(&self) {
        if self.is_destroyed() {
            self.calls_after_destroy.fetch_add(1, Ordering::SeqCst);
        }
    }
}

pub struct MockPlayer {
    probe: Arc<PlayerProbe>,
}

impl PlayerPort for MockPlayer {
    fn get_current_time(&self) -> f64 {
        self.probe.touch();
        self.probe.time_queries.fetch_add(1, Ordering::SeqCst);
        *self.probe.position.lock().unwrap()
    }

    fn get_duration(&self) -> f64 {
        self.probe.touch();
        self.probe.duration
    }

    fn play_video(&mut self) {
        self.probe.touch();
        self.probe.commands.lock().unwrap().push(PlayerCommand::Play);
    }

    fn pause_video(&mut self) {
        self.probe.touch();
        self.probe.commands.lock().unwrap().push(PlayerCommand::Pause);
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) {
        self.probe.touch();
        *self.probe.position.lock().unwrap() = seconds;
        self.probe
            .commands
            .lock()
            .unwrap()
            .push(PlayerCommand::SeekTo(seconds));
    }

    fn destroy(&mut self) {
        self.probe.touch();
        self.probe.destroyed.store(true, Ordering::SeqCst);
    }
}

/// Hands out mock players and keeps their probes
pub struct MockPlayerFactory {
    duration: f64,
    pub probes: Mutex<Vec<Arc<PlayerProbe>>>,
}

impl MockPlayerFactory {
    pub fn new(duration: f64) -> Arc<Self> {
        Arc::new(Self {
            duration,
            probes: Mutex::new(Vec::new()),
        })
    }

    pub fn probe(&self, index: usize) -> Arc<PlayerProbe> {
        Arc::clone(&self.probes.lock().unwrap()[index])
    }

    pub fn latest(&self) -> Arc<PlayerProbe> {
        Arc::clone(self.probes.lock().unwrap().last().expect("no player created"))
    }

    pub fn created(&self) -> usize {
        self.probes.lock().unwrap().len()
    }
}

impl PlayerFactory for MockPlayerFactory {
    fn create(&self, video_id: &VideoId) -> Box<dyn PlayerPort> {
        let probe = Arc::new(PlayerProbe {
            video_id: video_id.to_string(),
            duration: self.duration,
            ..Default::default()
        });
        self.probes.lock().unwrap().push(Arc::clone(&probe));
        Box::new(MockPlayer { probe })
    }
}

/// Scripted extraction service
pub struct MockExtraction {
    response: Result<Vec<u8>, TransportError>,
    delay: Option<Duration>,
    gate: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<DownloadRequest>>,
}

impl MockExtraction {
    pub fn responding(response: Result<Vec<u8>, TransportError>) -> Self {
        Self {
            response,
            delay: None,
            gate: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Hold every request until the gate is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DownloadRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ExtractionPort for MockExtraction {
    async fn request_clip(&self, request: &DownloadRequest) -> Result<Vec<u8>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

/// In-memory clip sink
#[derive(Default)]
pub struct MemorySink {
    pub fail: bool,
    pub saved: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipSink for MemorySink {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DomainError> {
        if self.fail {
            return Err(DomainError::Save("disk full".to_string()));
        }
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Serve a single canned HTTP response; the join handle yields the raw request
pub async fn serve_once(
    status_line: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&request[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            content_type,
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}", addr), handle)
}

/// JSON body of a captured HTTP request
pub fn request_json(raw: &[u8]) -> serde_json::Value {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("request has a header terminator");
    serde_json::from_slice(&raw[end + 4..]).unwrap()
}

// Player session - Observable state machine over the embedded player

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{format_time, VideoId};
use crate::ports::{PlaybackSignal, PlayerEvent, PlayerFactory, PlayerPort};

/// Default cadence of position sampling while playing
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
}

/// `Unloaded -> Loading -> Ready(Paused <-> Playing)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unloaded,
    Loading,
    Ready(Playback),
}

struct SessionInner {
    state: SessionState,
    video_id: Option<VideoId>,
    player: Option<Box<dyn PlayerPort>>,
    position: f64,
    duration: f64,
    /// Bumped whenever sampling must stop; a poller only acts on its own epoch
    poll_epoch: u64,
}

fn lock(shared: &Mutex<SessionInner>) -> MutexGuard<'_, SessionInner> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns exactly one player instance at a time and mirrors its state
pub struct PlayerSession {
    shared: Arc<Mutex<SessionInner>>,
    factory: Arc<dyn PlayerFactory>,
    poll_interval: Duration,
    poller: Option<JoinHandle<()>>,
}

impl PlayerSession {
    pub fn new(factory: Arc<dyn PlayerFactory>) -> Self {
        Self::with_poll_interval(factory, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(factory: Arc<dyn PlayerFactory>, poll_interval: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(SessionInner {
                state: SessionState::Unloaded,
                video_id: None,
                player: None,
                position: 0.0,
                duration: 0.0,
                poll_epoch: 0,
            })),
            factory,
            poll_interval,
            poller: None,
        }
    }

    /// Destroy any current player and create one for `video_id`
    pub fn load(&mut self, video_id: VideoId) {
        self.teardown();

        let player = self.factory.create(&video_id);
        let mut inner = lock(&self.shared);
        info!(video_id = %video_id, "Loading player");
        inner.player = Some(player);
        inner.video_id = Some(video_id);
        inner.state = SessionState::Loading;
        inner.position = 0.0;
        inner.duration = 0.0;
    }

    /// Stop sampling, destroy the player and return to `Unloaded`
    pub fn teardown(&mut self) {
        self.stop_polling();

        let mut inner = lock(&self.shared);
        if let Some(mut player) = inner.player.take() {
            info!(video_id = ?inner.video_id, "Destroying player");
            player.destroy();
        }
        inner.state = SessionState::Unloaded;
        inner.video_id = None;
        inner.position = 0.0;
        inner.duration = 0.0;
    }

    /// Apply an event reported by the player
    pub fn handle_event(&mut self, event: PlayerEvent) {
        let start = {
            let mut inner = lock(&self.shared);
            match (event, inner.state) {
                (PlayerEvent::Ready, SessionState::Loading) => {
                    let duration = inner
                        .player
                        .as_ref()
                        .map(|p| p.get_duration())
                        .unwrap_or(0.0);
                    inner.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
                    inner.state = SessionState::Ready(Playback::Paused);
                    info!(duration = inner.duration, "Player ready");
                    None
                }
                (PlayerEvent::StateChanged(signal), SessionState::Ready(current)) => {
                    let next = match signal {
                        PlaybackSignal::Playing => Playback::Playing,
                        PlaybackSignal::Other => Playback::Paused,
                    };
                    inner.state = SessionState::Ready(next);
                    debug!(?current, ?next, "Playback changed");
                    Some(next == Playback::Playing)
                }
                (event, state) => {
                    debug!(?event, ?state, "Ignoring player event");
                    None
                }
            }
        };

        match start {
            Some(true) => self.start_polling(),
            Some(false) => self.stop_polling(),
            None => {}
        }
    }

    /// Toggle playback. The resulting player event updates the state.
    pub fn play_pause(&mut self) -> Result<(), DomainError> {
        let mut inner = lock(&self.shared);
        let playing = match inner.state {
            SessionState::Ready(playback) => playback == Playback::Playing,
            _ => return Err(DomainError::NotReady),
        };
        if let Some(player) = inner.player.as_mut() {
            if playing {
                debug!("Pausing video");
                player.pause_video();
            } else {
                debug!("Playing video");
                player.play_video();
            }
        }
        Ok(())
    }

    /// Seek by `delta_seconds`, clamped to the video bounds
    pub fn seek_relative(&mut self, delta_seconds: f64) -> Result<f64, DomainError> {
        let mut inner = lock(&self.shared);
        if !matches!(inner.state, SessionState::Ready(_)) {
            return Err(DomainError::NotReady);
        }
        let duration = inner.duration;
        let Some(player) = inner.player.as_mut() else {
            return Err(DomainError::NotReady);
        };
        let target = (player.get_current_time() + delta_seconds).clamp(0.0, duration);
        player.seek_to(target, true);
        inner.position = target;
        debug!(target, "Seeked");
        Ok(target)
    }

    /// Live player position; refused until the player is ready
    pub fn capture_current_time(&self) -> Result<f64, DomainError> {
        let mut inner = lock(&self.shared);
        if !matches!(inner.state, SessionState::Ready(_)) {
            return Err(DomainError::NotReady);
        }
        let position = inner
            .player
            .as_ref()
            .map(|p| p.get_current_time())
            .ok_or(DomainError::NotReady)?;
        inner.position = position;
        Ok(position)
    }

    pub fn state(&self) -> SessionState {
        lock(&self.shared).state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state(), SessionState::Ready(_))
    }

    pub fn is_playing(&self) -> bool {
        self.state() == SessionState::Ready(Playback::Playing)
    }

    pub fn video_id(&self) -> Option<VideoId> {
        lock(&self.shared).video_id.clone()
    }

    /// Last sampled position
    pub fn current_position(&self) -> f64 {
        lock(&self.shared).position
    }

    pub fn total_duration(&self) -> f64 {
        lock(&self.shared).duration
    }

    /// `current / total` readout
    pub fn position_display(&self) -> String {
        let inner = lock(&self.shared);
        format!(
            "{} / {}",
            format_time(inner.position),
            format_time(inner.duration)
        )
    }

    fn start_polling(&mut self) {
        if self.poller.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Position polling unavailable outside a runtime: {}", e);
                return;
            }
        };

        let epoch = lock(&self.shared).poll_epoch;
        let shared = Arc::clone(&self.shared);
        let period = self.poll_interval;

        self.poller = Some(runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let mut inner = lock(&shared);
                if inner.poll_epoch != epoch
                    || inner.state != SessionState::Ready(Playback::Playing)
                {
                    break;
                }
                let Some(position) = inner.player.as_ref().map(|p| p.get_current_time()) else {
                    break;
                };
                inner.position = position;
                debug!(position, "Sampled position");
            }
        }));
    }

    fn stop_polling(&mut self) {
        lock(&self.shared).poll_epoch += 1;
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

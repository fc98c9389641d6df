// Application layer - Stateful components and the interactor that owns them

pub mod clip_interactor;
pub mod clip_selector;
pub mod container;
pub mod download_orchestrator;
pub mod player_session;

// Re-export the main entry points
pub use clip_interactor::ClipInteractor;
pub use clip_selector::{ClipInfo, ClipSelector};
pub use download_orchestrator::{DownloadOrchestrator, DownloadPhase};
pub use player_session::{Playback, PlayerSession, SessionState};

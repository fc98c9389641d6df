// Adapters - External system implementations

pub mod fs_sink;
pub mod http_extraction;
pub mod toml_config;

// Re-export adapters
pub use fs_sink::FsClipSink;
pub use http_extraction::HttpExtractionAdapter;
pub use toml_config::{ClipperConfig, TomlConfigAdapter};

// Identifier extraction - Video ID from known URL shapes

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::model::{VideoId, VideoReference};

/// Union of the supported URL shapes: `watch?v=`, `youtu.be/`, `embed/`, `v/` (and `e/`)
const VIDEO_URL_PATTERN: &str =
    r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#;

fn video_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VIDEO_URL_PATTERN).expect("video URL pattern is valid"))
}

/// Extract the 11-character identifier, or `None` when no shape matches
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    video_url_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId::new_unchecked(m.as_str()))
}

pub fn is_valid_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

impl VideoReference {
    /// Build a reference from user-entered text
    pub fn parse(url: &str) -> Option<Self> {
        extract_video_id(url).map(|video_id| Self {
            source_url: url.to_string(),
            video_id,
        })
    }
}

/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which physical playback engine a track needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Directly streamable audio (an MP3 URL, a local file served over HTTP)
    Local,

    /// A video-platform page URL played through an embedded player
    StreamingEmbed,

    /// Some other remote source handled by a directly-streaming backend
    OtherRemote,
}

impl SourceKind {
    /// String representation matching the persisted form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::StreamingEmbed => "streaming-embed",
            Self::OtherRemote => "other-remote",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One playable item
///
/// Immutable once created: queue membership may change, the value itself
/// does not. The identifier is expected to be unique within a queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Which backend this track plays on
    pub source: SourceKind,

    /// Playable locator (stream URL or platform page URL)
    pub locator: String,

    /// Cover art URL
    pub cover_url: Option<String>,

    /// Known duration, when the source declares one up front
    pub duration: Option<Duration>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        source: SourceKind,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            source,
            locator: locator.into(),
            cover_url: None,
            duration: None,
        }
    }

    /// Same track with a cover art URL attached
    #[must_use]
    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }

    /// Same track with a known duration attached
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(
            "t1",
            "Jazz Comedy",
            "Bensound",
            SourceKind::Local,
            "https://example.com/jazzcomedy.mp3",
        )
        .with_cover_url("https://example.com/jazzcomedy.jpg");

        assert_eq!(track.id, "t1");
        assert_eq!(track.source, SourceKind::Local);
        assert_eq!(
            track.cover_url.as_deref(),
            Some("https://example.com/jazzcomedy.jpg")
        );
        assert!(track.duration.is_none());
    }

    #[test]
    fn source_kind_serde_form() {
        let json = serde_json::to_string(&SourceKind::StreamingEmbed).unwrap();
        assert_eq!(json, "\"streaming-embed\"");

        let kind: SourceKind = serde_json::from_str("\"other-remote\"").unwrap();
        assert_eq!(kind, SourceKind::OtherRemote);
    }

    #[test]
    fn track_round_trips_through_json() {
        let track = Track::new(
            "yt-1",
            "Lofi Hip Hop Radio",
            "Lofi Girl",
            SourceKind::StreamingEmbed,
            "https://www.youtube.com/watch?v=jfKfPfyJRdk",
        )
        .with_duration(Duration::from_secs(3600));

        let json = serde_json::to_string(&track).unwrap();
        let back: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}

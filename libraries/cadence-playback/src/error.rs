//! Error types for playback coordination

use cadence_core::SourceKind;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No registered backend handles this source kind
    #[error("No backend registered for source kind: {0}")]
    UnsupportedSource(SourceKind),

    /// Backend driver error
    #[error("Backend error: {0}")]
    Backend(String),
}

impl PlaybackError {
    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

//! Error types shared across Cadence Player

use thiserror::Error;

/// Result type alias using [`CoreError`]
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// Queue persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A pasted locator from which nothing playable could be derived
    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    /// Remote metadata lookup errors
    #[error("Metadata lookup failed: {0}")]
    MetadataLookup(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid locator error
    pub fn invalid_locator(msg: impl Into<String>) -> Self {
        Self::InvalidLocator(msg.into())
    }

    /// Create a metadata lookup error
    pub fn metadata_lookup(msg: impl Into<String>) -> Self {
        Self::MetadataLookup(msg.into())
    }
}

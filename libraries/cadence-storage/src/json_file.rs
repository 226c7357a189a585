//! JSON file queue store

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use cadence_core::{QueueStore, Result, Track};

/// Queue store backed by a single JSON document on disk
///
/// Writes are synchronous and whole-queue; the file is replaced on every
/// save. A missing file loads as an empty queue, and an unreadable or
/// unparseable one is logged and also loads as empty.
pub struct JsonFileQueueStore {
    path: PathBuf,
}

impl JsonFileQueueStore {
    /// Create a store over the given file path
    ///
    /// The file does not have to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl QueueStore for JsonFileQueueStore {
    fn save(&mut self, queue: &[Track]) -> Result<()> {
        let bytes = serde_json::to_vec(queue)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn load(&self) -> Vec<Track> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "queue file unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(queue) => queue,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "queue file malformed, starting empty");
                Vec::new()
            }
        }
    }
}

//! In-memory queue store

use std::cell::RefCell;
use std::rc::Rc;

use cadence_core::{QueueStore, Result, Track};

/// Queue store over a shared byte buffer
///
/// Clones share the same buffer, so a handle kept by a test (or by an
/// embedding that rebuilds sessions) observes saves made through another
/// handle. Stores the same JSON payload as the file store.
#[derive(Clone, Default)]
pub struct MemoryQueueStore {
    bytes: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryQueueStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with raw bytes
    ///
    /// Useful for exercising the malformed-data recovery path.
    #[must_use]
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Rc::new(RefCell::new(Some(bytes))),
        }
    }

    /// Whether anything has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_none()
    }
}

impl QueueStore for MemoryQueueStore {
    fn save(&mut self, queue: &[Track]) -> Result<()> {
        let bytes = serde_json::to_vec(queue)?;
        *self.bytes.borrow_mut() = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Vec<Track> {
        let bytes = self.bytes.borrow();
        let Some(bytes) = bytes.as_deref() else {
            return Vec::new();
        };

        match serde_json::from_slice(bytes) {
            Ok(queue) => queue,
            Err(err) => {
                tracing::warn!(error = %err, "stored queue malformed, starting empty");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::SourceKind;

    fn track(id: &str) -> Track {
        Track::new(
            id,
            format!("Track {id}"),
            "Artist",
            SourceKind::Local,
            format!("https://example.com/{id}.mp3"),
        )
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryQueueStore::new();
        let queue = vec![track("1"), track("2"), track("3")];

        store.save(&queue).unwrap();
        assert_eq!(store.load(), queue);
    }

    #[test]
    fn empty_store_loads_empty() {
        let store = MemoryQueueStore::new();
        assert!(store.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn clones_share_the_buffer() {
        let mut writer = MemoryQueueStore::new();
        let reader = writer.clone();

        writer.save(&[track("1")]).unwrap();
        assert_eq!(reader.load().len(), 1);
    }

    #[test]
    fn malformed_bytes_load_empty() {
        let store = MemoryQueueStore::with_bytes(b"not json at all".to_vec());
        assert!(store.load().is_empty());
    }
}

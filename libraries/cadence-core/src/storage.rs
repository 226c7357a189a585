//! Queue persistence contract

use crate::error::Result;
use crate::types::Track;

/// Persistence boundary for the ordered play queue
///
/// Implementations store the queue as a whole and hand it back in the same
/// order. The contract favors availability over strictness:
///
/// - [`load`](QueueStore::load) never fails. Absent data yields an empty
///   queue; malformed data is reported (logged) and also yields an empty
///   queue, never an error to the caller.
/// - [`save`](QueueStore::save) is best-effort; callers treat a failure as
///   non-fatal.
pub trait QueueStore {
    /// Persist the full queue, replacing whatever was stored before
    fn save(&mut self, queue: &[Track]) -> Result<()>;

    /// Load the persisted queue, or an empty one when nothing usable is stored
    fn load(&self) -> Vec<Track>;
}

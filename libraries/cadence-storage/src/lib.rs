//! Cadence Player - Queue Persistence
//!
//! [`QueueStore`](cadence_core::QueueStore) implementations:
//!
//! - [`JsonFileQueueStore`] - the whole queue as one JSON document on disk
//! - [`MemoryQueueStore`] - a byte buffer, for tests and embedding
//!
//! Both follow the store contract's recovery policy: absent data loads as
//! an empty queue, malformed data is logged and loads as an empty queue,
//! and neither case is an error to the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod memory;

pub use json_file::JsonFileQueueStore;
pub use memory::MemoryQueueStore;

// Re-export the contract these stores implement
pub use cadence_core::QueueStore;

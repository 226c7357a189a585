//! Cadence Player Core
//!
//! Domain types and contracts shared across the Cadence Player crates.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`SourceKind`], [`PlaybackState`]
//! - **Contracts**: [`QueueStore`] (queue persistence), [`MetadataLookup`]
//!   (remote metadata enrichment)
//! - **Error Handling**: unified [`CoreError`] and [`Result`] types
//! - **Locator Parsing**: extraction of embed video ids from pasted URLs
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{SourceKind, Track};
//!
//! let track = Track::new(
//!     "t1",
//!     "Jazz Comedy",
//!     "Bensound",
//!     SourceKind::Local,
//!     "https://example.com/jazzcomedy.mp3",
//! );
//! assert_eq!(track.source, SourceKind::Local);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod enrich;
pub mod error;
pub mod locator;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use enrich::{MetadataLookup, RemoteMetadata};
pub use error::{CoreError, Result};
pub use storage::QueueStore;
pub use types::{PlaybackState, SourceKind, Track};

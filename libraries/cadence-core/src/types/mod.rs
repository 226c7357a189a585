//! Domain types for Cadence Player

mod playback_state;
mod track;

pub use playback_state::PlaybackState;
pub use track::{SourceKind, Track};

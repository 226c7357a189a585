//! Backend capability contract
//!
//! Every playback engine sits behind [`MediaBackend`]: the rest of the
//! system never branches on backend identity. Driver-internal concerns
//! (script bootstrap handshakes, command buffering before readiness,
//! progress polling) stay inside the implementation.

use std::time::Duration;

use cadence_core::{PlaybackState, Track};

use crate::error::Result;
use crate::volume::Volume;

/// State change callback
pub type StateCallback = Box<dyn FnMut(PlaybackState)>;

/// Playback position callback
pub type TimeCallback = Box<dyn FnMut(Duration)>;

/// Track-ended callback
pub type EndedCallback = Box<dyn FnMut()>;

/// Uniform control contract over one playback engine
///
/// Control calls return once the command has been issued, not once it has
/// audibly taken effect; completion is observed through the event channel.
/// For the same reason implementations must not invoke registered callbacks
/// from within a control call.
///
/// A backend whose native engine becomes ready asynchronously must buffer
/// commands issued before readiness and flush them in issuing order once
/// ready ([`PendingCommands`](crate::PendingCommands) provides that state
/// machine).
pub trait MediaBackend {
    /// Begin playback of `track`
    ///
    /// When the currently loaded locator already equals `track.locator`,
    /// playback resumes in place instead of reloading, so the position is
    /// not reset.
    fn play(&mut self, track: &Track) -> Result<()>;

    /// Pause playback; a no-op when nothing is playing
    fn pause(&mut self) -> Result<()>;

    /// Resume paused playback; a no-op when not applicable
    fn resume(&mut self) -> Result<()>;

    /// Request a jump to `position`; clamping is the backend's job
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Best-effort track duration; zero when unknown
    fn duration(&self) -> Duration;

    /// Best-effort playback position; zero when unknown
    fn position(&self) -> Duration;

    /// Apply a volume level
    fn set_volume(&mut self, volume: Volume);

    /// Register a state change callback; fires on every state change
    fn on_state_change(&mut self, callback: StateCallback);

    /// Register a position callback; fires on every time update
    fn on_time_update(&mut self, callback: TimeCallback);

    /// Register a track-ended callback
    fn on_ended(&mut self, callback: EndedCallback);
}

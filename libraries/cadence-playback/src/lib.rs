//! Cadence Player - Playback Coordination
//!
//! Backend-agnostic playback control: one interface drives heterogeneous
//! playback engines (a direct stream player, a video-platform embedded
//! player), switching between them per track while a single session owns
//! queue, current track, and playback state.
//!
//! This crate provides:
//! - [`MediaBackend`] - the capability contract every backend driver
//!   implements
//! - [`CompositeDispatcher`] - exactly one active backend at a time, with
//!   origin-filtered event forwarding and handoff on source change
//! - [`PlaybackSession`] - the single control surface consumed by the UI
//! - [`Subscribers`] - ordered multi-subscriber callback fan-out
//! - [`PendingCommands`] - deferred command buffering for engines that
//!   become ready asynchronously
//! - [`Volume`] - volume level clamped to `[0, 1]` by construction
//!
//! # Architecture
//!
//! Everything here is single-threaded and event-driven, UI-thread style:
//! control calls return once issued, completion arrives through callbacks.
//! There is no async runtime and no `Send` bound anywhere; sharing is
//! `Rc`/`RefCell`.
//!
//! Backend drivers wrapping native engines live outside this crate; they
//! only have to satisfy [`MediaBackend`].
//!
//! # Example
//!
//! ```rust
//! use cadence_playback::{CompositeDispatcher, MediaBackend, PlaybackSession, Volume};
//! use cadence_core::{SourceKind, Track};
//! # use cadence_playback::{EndedCallback, Result, StateCallback, TimeCallback};
//! # use std::time::Duration;
//! # #[derive(Default)]
//! # struct NullBackend;
//! # impl MediaBackend for NullBackend {
//! #     fn play(&mut self, _track: &Track) -> Result<()> { Ok(()) }
//! #     fn pause(&mut self) -> Result<()> { Ok(()) }
//! #     fn resume(&mut self) -> Result<()> { Ok(()) }
//! #     fn seek(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//! #     fn duration(&self) -> Duration { Duration::ZERO }
//! #     fn position(&self) -> Duration { Duration::ZERO }
//! #     fn set_volume(&mut self, _volume: Volume) {}
//! #     fn on_state_change(&mut self, _callback: StateCallback) {}
//! #     fn on_time_update(&mut self, _callback: TimeCallback) {}
//! #     fn on_ended(&mut self, _callback: EndedCallback) {}
//! # }
//!
//! let mut dispatcher = CompositeDispatcher::new();
//! dispatcher.register(
//!     Box::new(NullBackend::default()),
//!     &[SourceKind::Local, SourceKind::OtherRemote],
//! );
//! dispatcher.register(Box::new(NullBackend::default()), &[SourceKind::StreamingEmbed]);
//!
//! let session = PlaybackSession::new(Box::new(dispatcher), None);
//!
//! let track = Track::new(
//!     "t1",
//!     "Jazz Comedy",
//!     "Bensound",
//!     SourceKind::Local,
//!     "https://example.com/jazzcomedy.mp3",
//! );
//! session.add_to_queue(track.clone());
//! session.play(&track)?;
//! session.set_volume(Volume::new(0.8));
//! # Ok::<(), cadence_playback::PlaybackError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod dispatcher;
mod error;
mod events;
mod readiness;
mod session;
mod volume;

// Public exports
pub use backend::{EndedCallback, MediaBackend, StateCallback, TimeCallback};
pub use dispatcher::CompositeDispatcher;
pub use error::{PlaybackError, Result};
pub use events::{SharedSubscribers, Subscribers};
pub use readiness::PendingCommands;
pub use session::PlaybackSession;
pub use volume::Volume;

//! Playback session
//!
//! The single control surface a UI consumes. Owns the play queue, the
//! current index, and the aggregate playback state mirrored from the
//! dispatcher, and persists the queue through an optional [`QueueStore`].
//!
//! Error policy throughout: availability over strict validation. Bad input
//! is a logged no-op; a persistence failure never blocks queueing; the
//! worst outcome of a malformed command is that it is ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use cadence_core::{PlaybackState, QueueStore, Track};

use crate::backend::MediaBackend;
use crate::error::{PlaybackError, Result};
use crate::events::Subscribers;
use crate::volume::Volume;

/// Queue, current track, and playback state orchestrator
///
/// Construct one per running UI and share it; the UI layer owns its
/// lifetime. Single-threaded by design, like the rest of this crate.
pub struct PlaybackSession {
    inner: Rc<SessionInner>,
}

struct SessionInner {
    dispatcher: RefCell<Box<dyn MediaBackend>>,
    store: RefCell<Option<Box<dyn QueueStore>>>,
    queue: RefCell<Vec<Track>>,
    current: Cell<Option<usize>>,
    state: Cell<PlaybackState>,
    track_subs: RefCell<Subscribers<Option<Track>>>,
    queue_subs: RefCell<Subscribers<Vec<Track>>>,
}

impl PlaybackSession {
    /// Create a session over a dispatcher (or any single backend)
    ///
    /// When a store is supplied, the persisted queue is loaded and adopted
    /// as the initial queue; nothing is selected and nothing plays until
    /// the UI asks.
    pub fn new(dispatcher: Box<dyn MediaBackend>, store: Option<Box<dyn QueueStore>>) -> Self {
        let queue = store.as_ref().map(|s| s.load()).unwrap_or_default();

        let inner = Rc::new(SessionInner {
            dispatcher: RefCell::new(dispatcher),
            store: RefCell::new(store),
            queue: RefCell::new(queue),
            current: Cell::new(None),
            state: Cell::new(PlaybackState::Stopped),
            track_subs: RefCell::new(Subscribers::new()),
            queue_subs: RefCell::new(Subscribers::new()),
        });

        let weak = Rc::downgrade(&inner);
        inner
            .dispatcher
            .borrow_mut()
            .on_state_change(Box::new(move |state| {
                if let Some(inner) = weak.upgrade() {
                    inner.state.set(state);
                }
            }));

        let weak = Rc::downgrade(&inner);
        inner.dispatcher.borrow_mut().on_ended(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                // Auto-advance; at the tail this is a bounds no-op and
                // playback simply stops.
                if let Err(err) = SessionInner::advance(&inner) {
                    tracing::warn!(error = %err, "auto-advance failed");
                }
            }
        }));

        Self { inner }
    }

    /// Append a track, persist the queue, and notify queue subscribers
    ///
    /// The first track added while stopped with nothing selected becomes
    /// the current track, without starting playback: it is selectable, not
    /// playing.
    pub fn add_to_queue(&self, track: Track) {
        let inner = &self.inner;
        inner.queue.borrow_mut().push(track);
        inner.persist_and_notify_queue();

        let first_while_idle = inner.queue.borrow().len() == 1
            && inner.state.get() == PlaybackState::Stopped
            && inner.current.get().is_none();
        if first_while_idle {
            inner.current.set(Some(0));
            inner.notify_track_changed();
        }
    }

    /// Play a queued track, looked up by identifier
    ///
    /// A track not present in the queue is a logged no-op; the session must
    /// stay usable after a bad request. Duplicate identifiers match the
    /// first occurrence.
    pub fn play(&self, track: &Track) -> Result<()> {
        let inner = &self.inner;
        let index = inner.queue.borrow().iter().position(|t| t.id == track.id);
        match index {
            Some(index) => SessionInner::play_index(inner, index),
            None => {
                tracing::debug!(track = %track.id, "play ignored: track not in queue");
                Ok(())
            }
        }
    }

    /// Toggle between playing and paused
    ///
    /// From stopped or paused with nothing selected, starts the first
    /// queued track; with a selection, resumes it. An empty queue is a
    /// no-op, as is toggling mid-buffer.
    pub fn toggle_play_pause(&self) -> Result<()> {
        let inner = &self.inner;
        match inner.state.get() {
            PlaybackState::Playing => inner.dispatcher.borrow_mut().pause(),
            PlaybackState::Paused | PlaybackState::Stopped => match inner.current.get() {
                Some(_) => inner.dispatcher.borrow_mut().resume(),
                None if inner.queue.borrow().is_empty() => Ok(()),
                None => SessionInner::play_index(inner, 0),
            },
            PlaybackState::Buffering => Ok(()),
        }
    }

    /// Advance to the next queued track; a no-op at the tail
    pub fn next(&self) -> Result<()> {
        SessionInner::advance(&self.inner)
    }

    /// Retreat to the previous queued track; a no-op at index 0
    pub fn previous(&self) -> Result<()> {
        let inner = &self.inner;
        match inner.current.get() {
            Some(index) if index > 0 => SessionInner::play_index(inner, index - 1),
            _ => Ok(()),
        }
    }

    /// Request a seek on the active backend
    pub fn seek(&self, position: Duration) -> Result<()> {
        self.inner.dispatcher.borrow_mut().seek(position)
    }

    /// Apply a volume level (the dispatcher broadcasts it to all backends)
    pub fn set_volume(&self, volume: Volume) {
        self.inner.dispatcher.borrow_mut().set_volume(volume);
    }

    /// Best-effort duration of the active track; zero when unknown
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.inner.dispatcher.borrow().duration()
    }

    /// Best-effort playback position; zero when unknown
    #[must_use]
    pub fn position(&self) -> Duration {
        self.inner.dispatcher.borrow().position()
    }

    /// Aggregate playback state
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.inner.state.get()
    }

    /// Index of the current track, when one is selected
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.inner.current.get()
    }

    /// The current track, when one is selected
    ///
    /// `None` also covers a stale index left behind by a shrunken queue.
    #[must_use]
    pub fn current_track(&self) -> Option<Track> {
        let index = self.inner.current.get()?;
        self.inner.queue.borrow().get(index).cloned()
    }

    /// Snapshot of the queue in play order
    #[must_use]
    pub fn queue(&self) -> Vec<Track> {
        self.inner.queue.borrow().clone()
    }

    /// Subscribe to current-track changes
    pub fn on_track_change(&self, callback: Box<dyn FnMut(Option<Track>)>) {
        self.inner.track_subs.borrow_mut().subscribe(callback);
    }

    /// Subscribe to queue changes
    ///
    /// Fires immediately with the current snapshot so a late subscriber
    /// renders the existing queue without waiting for the next mutation.
    pub fn on_queue_change(&self, mut callback: Box<dyn FnMut(Vec<Track>)>) {
        callback(self.inner.queue.borrow().clone());
        self.inner.queue_subs.borrow_mut().subscribe(callback);
    }
}

impl SessionInner {
    /// Select `index`, delegate play, then notify track subscribers
    fn play_index(inner: &Rc<Self>, index: usize) -> Result<()> {
        let track = match inner.queue.borrow().get(index) {
            Some(track) => track.clone(),
            None => return Ok(()),
        };
        inner.current.set(Some(index));

        let played = inner.dispatcher.borrow_mut().play(&track);
        match played {
            Ok(()) => {}
            Err(PlaybackError::UnsupportedSource(kind)) => {
                // Invalid input, not a fault: stay usable, skip the command
                tracing::warn!(track = %track.id, source = %kind, "no backend for source, play ignored");
            }
            Err(err) => return Err(err),
        }

        inner.notify_track_changed();
        Ok(())
    }

    /// Move the selection forward by one and play it
    ///
    /// With nothing selected and a non-empty queue this starts at index 0,
    /// mirroring a next-press on a freshly loaded queue.
    fn advance(inner: &Rc<Self>) -> Result<()> {
        let len = inner.queue.borrow().len();
        let target = match inner.current.get() {
            Some(index) if index + 1 < len => index + 1,
            Some(_) => return Ok(()),
            None if len > 0 => 0,
            None => return Ok(()),
        };
        Self::play_index(inner, target)
    }

    fn persist_and_notify_queue(&self) {
        let snapshot = self.queue.borrow().clone();
        if let Some(store) = self.store.borrow_mut().as_mut() {
            if let Err(err) = store.save(&snapshot) {
                tracing::warn!(error = %err, "queue persistence failed");
            }
        }
        self.queue_subs.borrow_mut().emit(snapshot);
    }

    fn notify_track_changed(&self) {
        let track = self
            .current
            .get()
            .and_then(|index| self.queue.borrow().get(index).cloned());
        self.track_subs.borrow_mut().emit(track);
    }
}

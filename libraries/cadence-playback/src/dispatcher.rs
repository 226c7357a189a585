//! Composite dispatcher
//!
//! Owns the registered backends and designates exactly one as active. All
//! control delegates to the active backend (volume excepted, which
//! broadcasts), and events are forwarded only when their origin backend is
//! the active one at the moment they fire. A superseded backend is not torn
//! down; it may keep polling or keep its engine warm, and whatever it emits
//! is dropped here instead of corrupting the subscribers' view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use cadence_core::{PlaybackState, SourceKind, Track};

use crate::backend::{EndedCallback, MediaBackend, StateCallback, TimeCallback};
use crate::error::{PlaybackError, Result};
use crate::events::{SharedSubscribers, Subscribers};
use crate::volume::Volume;

struct BackendSlot {
    kinds: Vec<SourceKind>,
    backend: Box<dyn MediaBackend>,
}

/// Backend multiplexer, itself a [`MediaBackend`]
///
/// Built for two backends in practice but supports any number. The first
/// registered backend starts out active.
pub struct CompositeDispatcher {
    slots: Vec<BackendSlot>,
    active: Rc<Cell<usize>>,
    state_subs: SharedSubscribers<PlaybackState>,
    time_subs: SharedSubscribers<Duration>,
    ended_subs: SharedSubscribers<()>,
    volume: Option<Volume>,
}

impl CompositeDispatcher {
    /// Create a dispatcher with no backends
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            active: Rc::new(Cell::new(0)),
            state_subs: Rc::new(RefCell::new(Subscribers::new())),
            time_subs: Rc::new(RefCell::new(Subscribers::new())),
            ended_subs: Rc::new(RefCell::new(Subscribers::new())),
            volume: None,
        }
    }

    /// Register a backend for the source kinds it handles
    ///
    /// Subscribes to the backend's events immediately, tagged with the
    /// backend's slot, so delivery-time filtering can tell origins apart.
    /// The last applied volume is pushed to the new backend so a later
    /// handoff does not change loudness.
    pub fn register(&mut self, mut backend: Box<dyn MediaBackend>, kinds: &[SourceKind]) {
        let origin = self.slots.len();

        let active = Rc::clone(&self.active);
        let subs = Rc::clone(&self.state_subs);
        backend.on_state_change(Box::new(move |state| {
            if active.get() == origin {
                subs.borrow_mut().emit(state);
            }
        }));

        let active = Rc::clone(&self.active);
        let subs = Rc::clone(&self.time_subs);
        backend.on_time_update(Box::new(move |position| {
            if active.get() == origin {
                subs.borrow_mut().emit(position);
            }
        }));

        let active = Rc::clone(&self.active);
        let subs = Rc::clone(&self.ended_subs);
        backend.on_ended(Box::new(move || {
            if active.get() == origin {
                subs.borrow_mut().emit(());
            }
        }));

        if let Some(volume) = self.volume {
            backend.set_volume(volume);
        }
        self.slots.push(BackendSlot {
            kinds: kinds.to_vec(),
            backend,
        });
    }

    /// Slot index of the currently active backend, if any is registered
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.active.get())
        }
    }

    fn active_slot_mut(&mut self) -> Option<&mut dyn MediaBackend> {
        let index = self.active_index()?;
        Some(self.slots[index].backend.as_mut())
    }

    fn active_slot(&self) -> Option<&dyn MediaBackend> {
        let index = self.active_index()?;
        Some(self.slots[index].backend.as_ref())
    }
}

impl Default for CompositeDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaBackend for CompositeDispatcher {
    fn play(&mut self, track: &Track) -> Result<()> {
        let target = self
            .slots
            .iter()
            .position(|slot| slot.kinds.contains(&track.source))
            .ok_or_else(|| PlaybackError::UnsupportedSource(track.source))?;

        let current = self.active.get();
        if target != current {
            // Silence the outgoing backend before the handoff so at most
            // one backend is ever audible.
            self.slots[current].backend.pause()?;
            self.active.set(target);
            tracing::debug!(from = current, to = target, source = %track.source, "backend handoff");
        }

        self.slots[target].backend.play(track)
    }

    fn pause(&mut self) -> Result<()> {
        match self.active_slot_mut() {
            Some(backend) => backend.pause(),
            None => Ok(()),
        }
    }

    fn resume(&mut self) -> Result<()> {
        match self.active_slot_mut() {
            Some(backend) => backend.resume(),
            None => Ok(()),
        }
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        match self.active_slot_mut() {
            Some(backend) => backend.seek(position),
            None => Ok(()),
        }
    }

    fn duration(&self) -> Duration {
        self.active_slot()
            .map_or(Duration::ZERO, |backend| backend.duration())
    }

    fn position(&self) -> Duration {
        self.active_slot()
            .map_or(Duration::ZERO, |backend| backend.position())
    }

    fn set_volume(&mut self, volume: Volume) {
        // Broadcast so a later handoff keeps the user's chosen volume
        self.volume = Some(volume);
        for slot in &mut self.slots {
            slot.backend.set_volume(volume);
        }
    }

    fn on_state_change(&mut self, callback: StateCallback) {
        self.state_subs.borrow_mut().subscribe(callback);
    }

    fn on_time_update(&mut self, callback: TimeCallback) {
        self.time_subs.borrow_mut().subscribe(callback);
    }

    fn on_ended(&mut self, mut callback: EndedCallback) {
        self.ended_subs
            .borrow_mut()
            .subscribe(Box::new(move |()| callback()));
    }
}

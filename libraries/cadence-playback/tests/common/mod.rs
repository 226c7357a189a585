//! Shared test fixtures: a scriptable fake backend and track factories

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use cadence_core::{PlaybackState, SourceKind, Track};
use cadence_playback::{
    EndedCallback, MediaBackend, Result, StateCallback, Subscribers, TimeCallback, Volume,
};

/// Control commands observed by the fake backend
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(String),
    Pause,
    Resume,
    Seek(Duration),
    SetVolume(f32),
}

#[derive(Default)]
struct FakeInner {
    commands: Vec<Command>,
    loaded: Option<String>,
    position: Duration,
    duration: Duration,
}

/// Fake backend driver
///
/// Records every control command and never emits events on its own; tests
/// drive the event side explicitly through `emit_*`, the way a native
/// engine would signal asynchronously. Clones share state, so a handle kept
/// by the test observes a twin that was moved into the dispatcher.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<FakeInner>>,
    state_subs: Rc<RefCell<Subscribers<PlaybackState>>>,
    time_subs: Rc<RefCell<Subscribers<Duration>>>,
    ended_subs: Rc<RefCell<Subscribers<()>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.inner.borrow().commands.clone()
    }

    pub fn last_command(&self) -> Option<Command> {
        self.inner.borrow().commands.last().cloned()
    }

    pub fn play_count(&self) -> usize {
        self.inner
            .borrow()
            .commands
            .iter()
            .filter(|c| matches!(c, Command::Play(_)))
            .count()
    }

    pub fn loaded(&self) -> Option<String> {
        self.inner.borrow().loaded.clone()
    }

    /// Simulate playback progress inside the native engine
    pub fn set_position(&self, position: Duration) {
        self.inner.borrow_mut().position = position;
    }

    pub fn set_duration(&self, duration: Duration) {
        self.inner.borrow_mut().duration = duration;
    }

    pub fn emit_state(&self, state: PlaybackState) {
        self.state_subs.borrow_mut().emit(state);
    }

    pub fn emit_time(&self, position: Duration) {
        self.time_subs.borrow_mut().emit(position);
    }

    pub fn emit_ended(&self) {
        self.ended_subs.borrow_mut().emit(());
    }
}

impl MediaBackend for FakeBackend {
    fn play(&mut self, track: &Track) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        // Resume in place when the locator is already loaded; reloading
        // would reset the position.
        if inner.loaded.as_deref() != Some(track.locator.as_str()) {
            inner.loaded = Some(track.locator.clone());
            inner.position = Duration::ZERO;
        }
        inner.commands.push(Command::Play(track.locator.clone()));
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.inner.borrow_mut().commands.push(Command::Pause);
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.inner.borrow_mut().commands.push(Command::Resume);
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.position = position.min(inner.duration);
        inner.commands.push(Command::Seek(position));
        Ok(())
    }

    fn duration(&self) -> Duration {
        self.inner.borrow().duration
    }

    fn position(&self) -> Duration {
        self.inner.borrow().position
    }

    fn set_volume(&mut self, volume: Volume) {
        self.inner
            .borrow_mut()
            .commands
            .push(Command::SetVolume(volume.level()));
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

/// A directly streamable track
pub fn local_track(id: &str) -> Track {
    Track::new(
        id,
        format!("Track {id}"),
        "Test Artist",
        SourceKind::Local,
        format!("https://example.com/{id}.mp3"),
    )
}

/// A track played through the embedded player
pub fn embed_track(id: &str) -> Track {
    Track::new(
        id,
        format!("Video {id}"),
        "Test Channel",
        SourceKind::StreamingEmbed,
        format!("https://www.youtube.com/watch?v=x{id:0>10}"),
    )
}

//! Deferred commands for not-yet-ready backends
//!
//! Some native engines bootstrap asynchronously (an external script load,
//! an iframe handshake) and cannot accept commands until they signal ready.
//! The contract still guarantees that commands issued before readiness take
//! effect, in issuing order, once the engine comes up. [`PendingCommands`]
//! is that guarantee as an explicit `not-ready -> ready` state machine,
//! instead of readiness checks scattered through every operation.

use std::collections::VecDeque;

/// A buffered control command
pub type Command = Box<dyn FnOnce()>;

/// Command buffer that defers until a readiness transition
pub struct PendingCommands {
    ready: bool,
    pending: VecDeque<Command>,
}

impl PendingCommands {
    /// Create a buffer in the not-ready state
    #[must_use]
    pub fn new() -> Self {
        Self {
            ready: false,
            pending: VecDeque::new(),
        }
    }

    /// Whether the readiness transition has happened
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of commands waiting for the transition
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Run `command` now when ready, otherwise buffer it
    pub fn run_or_defer(&mut self, command: impl FnOnce() + 'static) {
        if self.ready {
            command();
        } else {
            self.pending.push_back(Box::new(command));
        }
    }

    /// Mark the engine ready and flush buffered commands in issuing order
    ///
    /// Idempotent; later calls do nothing.
    pub fn set_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        while let Some(command) = self.pending.pop_front() {
            command();
        }
    }
}

impl Default for PendingCommands {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn commands_are_deferred_until_ready() {
        let log: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut commands = PendingCommands::new();

        let sink = Rc::clone(&log);
        commands.run_or_defer(move || sink.borrow_mut().push("load"));
        let sink = Rc::clone(&log);
        commands.run_or_defer(move || sink.borrow_mut().push("play"));

        assert!(!commands.is_ready());
        assert_eq!(commands.pending_len(), 2);
        assert!(log.borrow().is_empty());

        commands.set_ready();
        assert_eq!(*log.borrow(), vec!["load", "play"]);
        assert_eq!(commands.pending_len(), 0);
    }

    #[test]
    fn commands_after_ready_run_immediately() {
        let log: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut commands = PendingCommands::new();
        commands.set_ready();

        let sink = Rc::clone(&log);
        commands.run_or_defer(move || sink.borrow_mut().push("seek"));

        assert_eq!(*log.borrow(), vec!["seek"]);
        assert_eq!(commands.pending_len(), 0);
    }

    #[test]
    fn set_ready_is_idempotent() {
        let count = Rc::new(RefCell::new(0));
        let mut commands = PendingCommands::new();

        let sink = Rc::clone(&count);
        commands.run_or_defer(move || *sink.borrow_mut() += 1);

        commands.set_ready();
        commands.set_ready();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn flush_preserves_issuing_order_across_many_commands() {
        let log: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let mut commands = PendingCommands::new();

        for i in 0..10 {
            let sink = Rc::clone(&log);
            commands.run_or_defer(move || sink.borrow_mut().push(i));
        }

        commands.set_ready();
        assert_eq!(*log.borrow(), (0..10).collect::<Vec<_>>());
    }
}

//! Subscriber fan-out
//!
//! Backends, the dispatcher, and the session all notify interested parties
//! through ordered callback lists: every registered callback fires on every
//! event, synchronously and in registration order. There is no unsubscribe;
//! current consumers register once for the lifetime of the session.

use std::cell::RefCell;
use std::rc::Rc;

/// Ordered multi-subscriber callback list
pub struct Subscribers<T> {
    callbacks: Vec<Box<dyn FnMut(T)>>,
}

/// A subscriber list shared between an owner and its event-producing closures
pub type SharedSubscribers<T> = Rc<RefCell<Subscribers<T>>>;

impl<T: Clone> Subscribers<T> {
    /// Create an empty subscriber list
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Append a callback; it will fire on every subsequent event
    pub fn subscribe(&mut self, callback: Box<dyn FnMut(T)>) {
        self.callbacks.push(callback);
    }

    /// Invoke every callback, in registration order, with a clone of `value`
    pub fn emit(&mut self, value: T) {
        for callback in &mut self.callbacks {
            callback(value.clone());
        }
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callback is registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: Clone> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_fires_on_every_event() {
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));

        let mut subs: Subscribers<u32> = Subscribers::new();
        let sink = Rc::clone(&seen_a);
        subs.subscribe(Box::new(move |v| sink.borrow_mut().push(v)));
        let sink = Rc::clone(&seen_b);
        subs.subscribe(Box::new(move |v| sink.borrow_mut().push(v)));

        subs.emit(1);
        subs.emit(2);

        assert_eq!(*seen_a.borrow(), vec![1, 2]);
        assert_eq!(*seen_b.borrow(), vec![1, 2]);
    }

    #[test]
    fn delivery_follows_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut subs: Subscribers<()> = Subscribers::new();
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            subs.subscribe(Box::new(move |()| sink.borrow_mut().push(tag)));
        }

        subs.emit(());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_list_emits_to_no_one() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        assert!(subs.is_empty());
        subs.emit(42); // must not panic
        assert_eq!(subs.len(), 0);
    }
}

//! Observable value holder. UI collaborators subscribe to a store and are
//! called back synchronously every time its value changes.

use std::fmt;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type Callback<T> = Box<dyn FnMut(&T)>;

pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
    next_id: usize,
}

impl<T: Clone + PartialEq> Store<T> {
    pub fn new(value: T) -> Self {
        Store {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register a callback. It is invoked once immediately with the current
    /// value, then after every change.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriberId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        callback(&self.value);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Replace the value, notifying subscribers if it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }

    /// Mutate the value in place, notifying subscribers if it changed.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let before = self.value.clone();
        let result = f(&mut self.value);
        if self.value != before {
            self.notify();
        }
        result
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

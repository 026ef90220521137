//! Observable value cell.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Shared by every store so ids stay unique across a whole state object.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Handle returned by `subscribe`, used to unsubscribe later.
///
/// Ids are unique within the process, not just within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Callback invoked with the current value of a [`Store`].
pub type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value plus the callbacks interested in it.
///
/// `Store` never notifies on its own: [`Store::replace`] swaps the value and
/// [`Store::notify`] fans it out. This lets an owner update several stores
/// before any subscriber runs.
pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
}

impl<T> Store<T> {
    /// Creates a store holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value without notifying. Returns the previous value.
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Registers `callback` and calls it once with the current value.
    pub fn subscribe<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(NEXT_ID.fetch_add(1, Ordering::Relaxed));

        callback(&self.value);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Returns false if `id` was not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Calls every subscriber with the current value, in subscription order.
    pub fn notify(&mut self) {
        let value = &self.value;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(value);
        }
    }

    /// Returns the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
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

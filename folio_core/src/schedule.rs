//! Cancellable scheduled tasks keyed by their owning component.
//!
//! Timers in the browser are fire-and-forget unless someone keeps the handle.
//! [`TaskRegistry`] keeps exactly one handle per key: scheduling again under
//! the same key cancels the previous task first, so repeated triggers (a
//! second form submit, another orientation change, a quick re-filter) never
//! leave a stale timer behind.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

/// A pending task that can be stopped before it fires.
pub trait Cancel {
    fn cancel(self);
}

/// Components that own timers on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskOwner {
    Typewriter,
    /// Counter animation for the element at this index.
    Counter(usize),
    Filter,
    ContactForm,
    Orientation,
}

#[derive(Debug)]
pub struct TaskRegistry<K, H> {
    tasks: HashMap<K, H>,
}

impl<K, H> Default for TaskRegistry<K, H> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }
}

impl<K, H> TaskRegistry<K, H>
where
    K: Eq + Hash + std::fmt::Debug,
    H: Cancel,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` under `key`, cancelling whatever was there.
    /// Returns true if a previous task was replaced.
    pub fn schedule(&mut self, key: K, handle: H) -> bool {
        match self.tasks.insert(key, handle) {
            Some(previous) => {
                previous.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self, key: &K) -> bool {
        match self.tasks.remove(key) {
            Some(handle) => {
                debug!("[folio][schedule] cancelled {key:?}");
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Forget a task that already ran, without cancelling it.
    pub fn complete(&mut self, key: &K) -> Option<H> {
        self.tasks.remove(key)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.tasks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.cancel();
        }
    }
}

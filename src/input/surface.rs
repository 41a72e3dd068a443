//! Process-wide input listener registry
//!
//! Listeners are registered per [`EventKind`] and stay registered exactly as long as
//! the returned [`Subscription`] guard is alive. Dropping the guard deregisters the
//! listener; there is no separate unsubscribe call to forget.

use crate::input::event::{EventKind, InputEvent};
use parking_lot::Mutex;
use smallvec::SmallVec;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Callback invoked for every dispatched event of the subscribed kind
pub type Listener = Arc<dyn Fn(&InputEvent) + Send + Sync>;

/// Identifier of a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Entry {
    id: SubscriptionId,
    kind: EventKind,
    listener: Listener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    // A panel holds two listeners; anything beyond a handful spills to the heap
    entries: SmallVec<[Entry; 4]>,
}

impl Registry {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

/// Shared handle to the ambient input surface
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct InputSurface {
    registry: Arc<Mutex<Registry>>,
}

impl InputSurface {
    /// Create an empty input surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of `kind`
    ///
    /// The listener is removed when the returned guard is dropped.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn(&InputEvent) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock();
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.entries.push(Entry {
            id,
            kind,
            listener: Arc::new(listener),
        });
        debug!(
            "Registered {:?} listener {} ({} live)",
            kind,
            id,
            registry.entries.len()
        );

        Subscription {
            id,
            kind,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every listener of its kind, returning how many ran
    ///
    /// The registry lock is not held while listeners run, so a listener may drop
    /// subscriptions (its own included). A listener removed earlier in the same
    /// dispatch is skipped.
    pub fn dispatch(&self, event: &InputEvent) -> usize {
        let kind = event.kind();
        let targets: SmallVec<[(SubscriptionId, Listener); 4]> = {
            let registry = self.registry.lock();
            registry
                .entries
                .iter()
                .filter(|entry| entry.kind == kind)
                .map(|entry| (entry.id, Arc::clone(&entry.listener)))
                .collect()
        };

        let mut delivered = 0;
        for (id, listener) in targets {
            if !self.registry.lock().contains(id) {
                trace!("Skipping listener {} removed during dispatch", id);
                continue;
            }
            listener(event);
            delivered += 1;
        }

        trace!("Dispatched {:?} to {} listener(s)", kind, delivered);
        delivered
    }

    /// Total number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Number of live listeners for one event kind
    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.registry
            .lock()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }
}

impl fmt::Debug for InputSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a registered listener; deregisters on drop
#[derive(Debug)]
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Identifier of the registered listener
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Event kind the listener receives
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.lock().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Surface already gone: nothing left to deregister from
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let mut registry = registry.lock();
        registry.entries.retain(|entry| entry.id != self.id);
        debug!(
            "Deregistered {:?} listener {} ({} live)",
            self.kind,
            self.id,
            registry.entries.len()
        );
    }
}

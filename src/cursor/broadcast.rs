//! Process-wide cursor fan-out.
//!
//! One cursor source (a system mouse hook or the device_query poller)
//! publishes samples; every overlay window in the process receives the same
//! sample through its own subscription.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::geometry::GlobalCursorSample;

type Subscriber = Arc<dyn Fn(GlobalCursorSample) + Send + Sync>;

/// Identifies one subscription on a [`CursorBroadcaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

/// Cloneable handle to a shared broadcast channel of global cursor samples.
#[derive(Clone, Default)]
pub struct CursorBroadcaster {
    inner: Arc<Inner>,
}

impl CursorBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler that receives every subsequent sample.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(GlobalCursorSample) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.write().push((id, Arc::new(handler)));
        log::debug!("[CURSOR] Subscriber {:?} attached", id);
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        let removed = subscribers.len() != before;
        if removed {
            log::debug!("[CURSOR] Subscriber {:?} detached", id);
        }
        removed
    }

    /// Deliver a sample to every subscriber, in subscription order.
    pub fn publish(&self, sample: GlobalCursorSample) {
        // Snapshot so handlers may (un)subscribe without deadlocking.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .read()
            .iter()
            .map(|(_, s)| Arc::clone(s))
            .collect();

        for subscriber in subscribers {
            subscriber(sample);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.read().len()
    }
}

impl std::fmt::Debug for CursorBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorBroadcaster")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

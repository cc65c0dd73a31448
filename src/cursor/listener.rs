use super::broadcast::{CursorBroadcaster, SubscriptionId};
use crate::geometry::GlobalCursorSample;

/// One overlay window's subscription to the global cursor stream.
///
/// Each received sample runs the handler synchronously, with no queueing in
/// between. The subscription lives until [`detach`](Self::detach) or drop,
/// whichever comes first.
#[derive(Debug)]
pub struct CursorBroadcastListener {
    broadcaster: CursorBroadcaster,
    id: Option<SubscriptionId>,
}

impl CursorBroadcastListener {
    pub fn subscribe<F>(broadcaster: &CursorBroadcaster, handler: F) -> Self
    where
        F: Fn(GlobalCursorSample) + Send + Sync + 'static,
    {
        let id = broadcaster.subscribe(handler);
        Self {
            broadcaster: broadcaster.clone(),
            id: Some(id),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.id.is_some()
    }

    /// Stop receiving samples. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(id) = self.id.take() {
            self.broadcaster.unsubscribe(id);
        }
    }
}

impl Drop for CursorBroadcastListener {
    fn drop(&mut self) {
        self.detach();
    }
}

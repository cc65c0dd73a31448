//! Dedicated event loop for one overlay window.
//!
//! Hosts deliver window and cursor notifications on arbitrary threads. They
//! are funnelled through a `flume` channel into a single thread that owns the
//! [`LayeredHitbox`], so the coordinator itself never needs a lock.

use std::thread::{self, JoinHandle};

use flume::{Receiver, Sender};

use super::hitbox::LayeredHitbox;
use super::types::{Flow, OverlayEvent};
use crate::cursor::{CursorBroadcastListener, CursorBroadcaster};
use crate::error::{HitboxError, HitboxResult};
use crate::hit_test::HitTester;
use crate::passthrough::PassthroughState;
use crate::platform::OverlayPlatform;

/// Cloneable producer side of an overlay's event loop.
#[derive(Debug, Clone)]
pub struct OverlaySender {
    tx: Sender<OverlayEvent>,
}

impl OverlaySender {
    pub fn send(&self, event: OverlayEvent) -> HitboxResult<()> {
        self.tx.send(event)?;
        Ok(())
    }

    /// True once the loop has exited and dropped its receiver.
    pub fn is_closed(&self) -> bool {
        self.tx.is_disconnected()
    }
}

/// Owner handle of a running overlay event loop.
///
/// Teardown is idempotent: the cursor subscription is detached first, then
/// the loop is asked to stop and joined. Dropping the handle does the same.
pub struct OverlayHandle {
    label: String,
    sender: OverlaySender,
    listener: Option<CursorBroadcastListener>,
    thread: Option<JoinHandle<HitboxResult<PassthroughState>>>,
}

impl OverlayHandle {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sender(&self) -> OverlaySender {
        self.sender.clone()
    }

    pub fn send(&self, event: OverlayEvent) -> HitboxResult<()> {
        self.sender.send(event)
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Subscribe this window to the global cursor stream. Replaces any
    /// previous subscription.
    pub fn attach_cursor(&mut self, broadcaster: &CursorBroadcaster) {
        if let Some(mut old) = self.listener.take() {
            old.detach();
        }

        let tx = self.sender.tx.clone();
        self.listener = Some(CursorBroadcastListener::subscribe(
            broadcaster,
            move |sample| {
                // A closed loop just stops caring about the cursor.
                let _ = tx.send(OverlayEvent::CursorMoved(sample));
            },
        ));
    }

    /// Stop the loop and return its final state.
    ///
    /// Returns `Ok(None)` if the loop was already joined, and the loop's
    /// error if it died on a platform failure.
    pub fn shutdown(&mut self) -> HitboxResult<Option<PassthroughState>> {
        if let Some(mut listener) = self.listener.take() {
            listener.detach();
        }

        let Some(thread) = self.thread.take() else {
            return Ok(None);
        };

        // The loop may already be gone after a platform error.
        let _ = self.sender.send(OverlayEvent::Shutdown);

        let state = thread
            .join()
            .map_err(|_| HitboxError::Other(format!("overlay '{}' loop panicked", self.label)))??;

        log::debug!("[HITBOX] Overlay '{}' stopped in {:?}", self.label, state);
        Ok(Some(state))
    }
}

impl Drop for OverlayHandle {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::error!("[HITBOX] Overlay '{}' shut down with error: {}", self.label, e);
        }
    }
}

impl std::fmt::Debug for OverlayHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayHandle")
            .field("label", &self.label)
            .field("running", &self.is_running())
            .field("cursor_attached", &self.listener.is_some())
            .finish()
    }
}

/// Move `hitbox` onto its own thread and start processing events.
pub fn spawn<P, H>(
    label: impl Into<String>,
    hitbox: LayeredHitbox<P, H>,
    coalesce_cursor_samples: bool,
) -> HitboxResult<OverlayHandle>
where
    P: OverlayPlatform + Send + 'static,
    H: HitTester + Send + 'static,
{
    let label = label.into();
    let (tx, rx) = flume::unbounded();

    let loop_label = label.clone();
    let thread = thread::Builder::new()
        .name(format!("overlay-{}", label))
        .spawn(move || {
            let result = run_loop(hitbox, &rx, coalesce_cursor_samples);
            if let Err(e) = &result {
                log::error!("[HITBOX] Overlay '{}' event loop failed: {}", loop_label, e);
            }
            result
        })?;

    log::debug!("[HITBOX] Overlay '{}' event loop started", label);

    Ok(OverlayHandle {
        label,
        sender: OverlaySender { tx },
        listener: None,
        thread: Some(thread),
    })
}

/// Drain events until `Shutdown`, disconnection, or a platform error.
///
/// Each sample runs its own evaluation cycle. With coalescing on (opt-in), a
/// run of cursor samples already waiting in the queue is reduced to its last
/// sample. Other events keep their position.
pub(crate) fn run_loop<P, H>(
    mut hitbox: LayeredHitbox<P, H>,
    rx: &Receiver<OverlayEvent>,
    coalesce_cursor_samples: bool,
) -> HitboxResult<PassthroughState>
where
    P: OverlayPlatform,
    H: HitTester,
{
    let mut pending: Option<OverlayEvent> = None;

    loop {
        let event = match pending.take() {
            Some(event) => event,
            None => match rx.recv() {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        let event = match event {
            OverlayEvent::CursorMoved(mut sample) if coalesce_cursor_samples => {
                while let Ok(next) = rx.try_recv() {
                    match next {
                        OverlayEvent::CursorMoved(newer) => sample = newer,
                        other => {
                            pending = Some(other);
                            break;
                        },
                    }
                }
                OverlayEvent::CursorMoved(sample)
            },
            other => other,
        };

        if hitbox.handle_event(event)? == Flow::Stop {
            break;
        }
    }

    Ok(hitbox.state())
}

//! Global cursor sampling via device_query.
//!
//! Stands in for a system-level mouse hook: polls the cursor position and
//! publishes to a [`CursorBroadcaster`] only when it moved, so idle cursors
//! cost the overlays nothing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use device_query::{DeviceQuery, DeviceState};

use super::CursorBroadcaster;
use crate::geometry::GlobalCursorSample;

/// Handle to the background polling thread.
pub struct CursorPoller {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl CursorPoller {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop polling and wait for the thread. Safe to call more than once.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("[CURSOR] Poller thread panicked");
            }
        }
    }
}

impl Drop for CursorPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `DeviceState::new` panics when no X display is reachable.
#[cfg(target_os = "linux")]
fn open_device_state() -> Option<DeviceState> {
    DeviceState::checked_new()
}

#[cfg(not(target_os = "linux"))]
fn open_device_state() -> Option<DeviceState> {
    Some(DeviceState::new())
}

/// Start sampling the global cursor every `interval`.
pub fn spawn_cursor_poller(broadcaster: CursorBroadcaster, interval: Duration) -> CursorPoller {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    let spawned = thread::Builder::new()
        .name("cursor-poller".into())
        .spawn(move || {
            let Some(device_state) = open_device_state() else {
                log::error!("[CURSOR] No input device connection, poller not started");
                running_clone.store(false, Ordering::Relaxed);
                return;
            };
            let mut last: Option<(i32, i32)> = None;
            log::info!("[CURSOR] Poller started ({:?} interval)", interval);

            while running_clone.load(Ordering::Relaxed) {
                let coords = device_state.get_mouse().coords;
                if last != Some(coords) {
                    last = Some(coords);
                    broadcaster.publish(GlobalCursorSample::from(coords));
                }
                thread::sleep(interval);
            }

            log::info!("[CURSOR] Poller stopped");
        });

    let thread = match spawned {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("[CURSOR] Failed to spawn poller thread: {}", e);
            running.store(false, Ordering::Relaxed);
            None
        },
    };

    CursorPoller { running, thread }
}

//! Tauri wiring for layered-hitbox overlay windows.
//!
//! A host app calls [`init`] once from its `setup` hook, then
//! [`declare_layered_hitbox`] for every overlay window it creates. The
//! frontend publishes its interactive element rectangles through
//! [`set_hitbox_regions`] whenever its layout changes.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tauri::{command, AppHandle, Emitter, Manager, WebviewWindow, WindowEvent};

use crate::config::overlay::{
    get_broadcast_to_webviews, get_coalesce_cursor_samples, get_cursor_poll_interval_ms,
    load_overlay_config,
};
use crate::cursor::{spawn_cursor_poller, CursorBroadcaster, CursorPoller};
use crate::error::{HitboxError, HitboxResult, OptionExt};
use crate::geometry::{Position, Size, WindowRect};
use crate::hit_test::{HitboxLayers, HitboxRegion};
use crate::overlay::{self, LayeredHitbox, OverlayEvent, OverlayHandle, OverlaySender};
use crate::platform::OverlayPlatform;

/// Event name under which global cursor samples are emitted to webviews.
pub const GLOBAL_MOUSE_MOVE_EVENT: &str = "global-mouse-move";

/// File name of the overlay config inside the app config directory.
const OVERLAY_CONFIG_FILE: &str = "overlay.json";

// ============================================================================
// Platform
// ============================================================================

impl OverlayPlatform for WebviewWindow {
    fn window_bounds(&self) -> HitboxResult<WindowRect> {
        let position = self
            .outer_position()
            .map_err(|e| HitboxError::Geometry(format!("Failed to get position: {}", e)))?;
        let size = self
            .outer_size()
            .map_err(|e| HitboxError::Geometry(format!("Failed to get size: {}", e)))?;

        Ok(WindowRect::new(
            position.x as f64,
            position.y as f64,
            size.width as f64,
            size.height as f64,
        ))
    }

    fn scale_factor(&self) -> HitboxResult<f64> {
        WebviewWindow::scale_factor(self)
            .map_err(|e| HitboxError::Platform(format!("Failed to get scale factor: {}", e)))
    }

    fn set_ignore_cursor_events(&self, ignore: bool) -> HitboxResult<()> {
        WebviewWindow::set_ignore_cursor_events(self, ignore).map_err(|e| {
            HitboxError::Platform(format!("Failed to set ignore cursor events: {}", e))
        })
    }
}

// ============================================================================
// Managed state
// ============================================================================

struct OverlayEntry {
    handle: OverlayHandle,
    layers: HitboxLayers,
}

/// All declared overlays, keyed by window label.
#[derive(Default)]
pub struct OverlayRegistry {
    overlays: Mutex<HashMap<String, OverlayEntry>>,
}

impl OverlayRegistry {
    fn insert(&self, label: String, handle: OverlayHandle, layers: HitboxLayers) {
        let previous = self
            .overlays
            .lock()
            .insert(label, OverlayEntry { handle, layers });
        // Dropping the old handle tears its loop down.
        drop(previous);
    }

    fn remove(&self, label: &str) {
        let entry = self.overlays.lock().remove(label);
        if let Some(mut entry) = entry {
            if let Err(e) = entry.handle.shutdown() {
                log::error!("[HITBOX] Overlay '{}' ended with error: {}", label, e);
            }
        }
    }

    fn layers(&self, label: &str) -> Option<HitboxLayers> {
        self.overlays.lock().get(label).map(|e| e.layers.clone())
    }

    fn sender(&self, label: &str) -> Option<OverlaySender> {
        self.overlays.lock().get(label).map(|e| e.handle.sender())
    }

    pub fn labels(&self) -> Vec<String> {
        self.overlays.lock().keys().cloned().collect()
    }
}

/// The process-wide cursor stream and the thread feeding it.
pub struct CursorService {
    pub broadcaster: CursorBroadcaster,
    poller: Mutex<CursorPoller>,
}

impl CursorService {
    pub fn stop(&self) {
        self.poller.lock().stop();
    }
}

fn load_config(app: &AppHandle) {
    let path = match app.path().app_config_dir() {
        Ok(dir) => dir.join(OVERLAY_CONFIG_FILE),
        Err(e) => {
            log::warn!("[CONFIG] No app config dir, using current settings: {}", e);
            return;
        },
    };
    if let Err(e) = load_overlay_config(&path) {
        log::warn!("[CONFIG] Failed to load {:?}, using current settings: {}", path, e);
    }
}

/// Register managed state and start the global cursor stream.
///
/// Call once from the Tauri builder's `setup` hook. Settings are read from
/// `overlay.json` in the app config directory when it exists.
pub fn init(app: &AppHandle) -> CursorBroadcaster {
    if let Some(service) = app.try_state::<CursorService>() {
        return service.broadcaster.clone();
    }

    load_config(app);
    let broadcaster = CursorBroadcaster::new();

    if get_broadcast_to_webviews() {
        let app_handle = app.clone();
        broadcaster.subscribe(move |sample| {
            if let Err(e) = app_handle.emit(GLOBAL_MOUSE_MOVE_EVENT, [sample.x, sample.y]) {
                log::trace!("[CURSOR] Failed to emit cursor sample: {}", e);
            }
        });
    }

    let interval = Duration::from_millis(get_cursor_poll_interval_ms());
    let poller = spawn_cursor_poller(broadcaster.clone(), interval);

    app.manage(OverlayRegistry::default());
    let installed = app.manage(CursorService {
        broadcaster,
        poller: Mutex::new(poller),
    });
    if installed {
        log::info!("[HITBOX] Overlay hitbox services initialized");
    } else {
        // Lost a concurrent init; our service (and its poller) was dropped.
        log::debug!("[HITBOX] Overlay hitbox services already initialized");
    }

    app.state::<CursorService>().broadcaster.clone()
}

// ============================================================================
// Declaration
// ============================================================================

/// Make `window` a layered hitbox: fully click-through except where the
/// frontend reports content under the cursor.
///
/// Returns the region set the frontend writes to.
pub fn declare_layered_hitbox(window: &WebviewWindow) -> HitboxResult<HitboxLayers> {
    let app = window.app_handle().clone();
    let broadcaster = init(&app);
    let label = window.label().to_string();

    let layers = HitboxLayers::new();
    let hitbox = LayeredHitbox::declare(window.clone(), layers.clone())?;
    let mut handle = overlay::spawn(label.clone(), hitbox, get_coalesce_cursor_samples())?;
    handle.attach_cursor(&broadcaster);

    let sender = handle.sender();
    app.state::<OverlayRegistry>()
        .insert(label.clone(), handle, layers.clone());

    window.on_window_event(move |event| {
        let forwarded = match event {
            WindowEvent::Moved(position) => OverlayEvent::Moved(Position::new(
                position.x as f64,
                position.y as f64,
            )),
            WindowEvent::Resized(size) => {
                OverlayEvent::Resized(Size::new(size.width as f64, size.height as f64))
            },
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                OverlayEvent::ScaleChanged(*scale_factor)
            },
            WindowEvent::Destroyed => {
                if let Some(registry) = app.try_state::<OverlayRegistry>() {
                    registry.remove(&label);
                }
                return;
            },
            _ => return,
        };

        if sender.send(forwarded).is_err() {
            log::trace!("[HITBOX] Overlay '{}' no longer running", label);
        }
    });

    Ok(layers)
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Declare the calling window as a layered hitbox.
#[command]
pub fn declare_layered_hitbox_cmd(window: WebviewWindow) -> Result<(), HitboxError> {
    declare_layered_hitbox(&window).map(|_| ())
}

/// Replace the content regions of the calling overlay.
#[command]
pub fn set_hitbox_regions(
    window: WebviewWindow,
    regions: Vec<HitboxRegion>,
) -> Result<(), HitboxError> {
    let registry = window
        .try_state::<OverlayRegistry>()
        .context("Overlay hitbox services not initialized")?;
    let layers = registry
        .layers(window.label())
        .with_context(|| format!("Window '{}' is not a layered hitbox", window.label()))?;

    layers.set_regions(regions);
    Ok(())
}

/// Remove every content region of the calling overlay.
#[command]
pub fn clear_hitbox_regions(window: WebviewWindow) -> Result<(), HitboxError> {
    set_hitbox_regions(window, Vec::new())
}

/// Stop the global cursor stream, e.g. right before the app exits.
#[command]
pub fn stop_global_cursor(app: AppHandle) -> Result<(), HitboxError> {
    let service = app
        .try_state::<CursorService>()
        .context("Cursor service not running")?;
    service.stop();
    Ok(())
}

/// Re-read an overlay's bounds and scale from the platform and feed them to
/// its loop.
///
/// Useful after programmatic repositioning or a DPI change where the host
/// suppresses window events.
#[command]
pub fn resync_hitbox_geometry(window: WebviewWindow) -> Result<(), HitboxError> {
    let rect = window.window_bounds()?;
    let scale = OverlayPlatform::scale_factor(&window)?;
    let sender = window
        .try_state::<OverlayRegistry>()
        .context("Overlay hitbox services not initialized")?
        .sender(window.label())
        .with_context(|| format!("Window '{}' is not a layered hitbox", window.label()))?;

    for event in resync_events(rect, scale) {
        sender.send(event)?;
    }
    Ok(())
}

/// Events that bring a loop's geometry and scale in line with `rect`/`scale`.
fn resync_events(rect: WindowRect, scale: f64) -> [OverlayEvent; 3] {
    [
        OverlayEvent::Moved(rect.position()),
        OverlayEvent::Resized(rect.size()),
        OverlayEvent::ScaleChanged(scale),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resync_carries_bounds_and_scale() {
        let events = resync_events(WindowRect::new(10.0, 20.0, 300.0, 40.0), 1.5);

        assert_eq!(
            events,
            [
                OverlayEvent::Moved(Position::new(10.0, 20.0)),
                OverlayEvent::Resized(Size::new(300.0, 40.0)),
                OverlayEvent::ScaleChanged(1.5),
            ]
        );
    }
}

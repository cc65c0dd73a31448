//! Input passthrough for borderless, always-on-top overlay windows.
//!
//! An overlay starts fully click-through. Every global cursor sample is mapped
//! into the window's local logical space and hit-tested against the rendered
//! content; the platform's "ignore cursor events" toggle is flipped only when
//! the cursor crosses between background and content.
//!
//! ```ignore
//! use overlay_hitbox_lib::{overlay, CursorBroadcaster, HitboxLayers, HitboxRegion, LayeredHitbox};
//!
//! let broadcaster = CursorBroadcaster::new();
//! let layers = HitboxLayers::new();
//! let hitbox = LayeredHitbox::declare(my_platform_window, layers.clone())?;
//! let mut handle = overlay::spawn("bar", hitbox, true)?;
//! handle.attach_cursor(&broadcaster);
//!
//! // Rendering layer:
//! layers.set_regions(vec![HitboxRegion::new(0.0, 0.0, 320.0, 40.0)]);
//! ```

#[cfg(feature = "tauri")]
pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod logging;
pub mod overlay;
pub mod passthrough;
pub mod platform;

pub use cursor::{CursorBroadcastListener, CursorBroadcaster};
pub use error::{HitboxError, HitboxResult};
pub use geometry::{CoordinateMapper, GeometryTracker, GlobalCursorSample, LocalPoint, WindowRect};
pub use hit_test::{HitClass, HitTester, HitboxLayers, HitboxRegion};
pub use overlay::{LayeredHitbox, OverlayEvent, OverlayHandle};
pub use passthrough::{PassthroughController, PassthroughState};
pub use platform::OverlayPlatform;

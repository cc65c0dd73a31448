//! Input-passthrough coordination for overlay windows.
//!
//! A borderless always-on-top overlay must let clicks fall through wherever
//! it draws nothing, and capture them wherever it draws content. This module
//! ties geometry, the global cursor stream and the hit tester together and
//! drives the platform's click-through toggle.
//!
//! # Architecture
//!
//! ```text
//! mod.rs (public API)
//!   |
//!   +-- types.rs      (OverlayEvent, Flow)
//!   +-- hitbox.rs     (LayeredHitbox: per-window coordinator)
//!   +-- event_loop.rs (flume-fed thread, OverlayHandle teardown)
//! ```
//!
//! Per cursor sample:
//!
//! ```text
//! CursorBroadcaster -> OverlaySender -> LayeredHitbox
//!   CoordinateMapper (rect, scale) -> HitTester -> PassthroughController
//! ```

mod event_loop;
mod hitbox;
mod types;


pub use event_loop::{spawn, OverlayHandle, OverlaySender};
pub use hitbox::LayeredHitbox;
pub use types::{Flow, OverlayEvent};

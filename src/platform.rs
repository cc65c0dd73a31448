//! Host platform seam.
//!
//! The coordinator never talks to a windowing toolkit directly. Everything it
//! needs from the host goes through [`OverlayPlatform`], which keeps the core
//! testable with a recording fake and lets the Tauri bridge plug in a real
//! `WebviewWindow`.

use crate::error::HitboxResult;
use crate::geometry::WindowRect;

/// Operations the passthrough coordinator consumes from the windowing layer.
pub trait OverlayPlatform {
    /// One-shot query of the window's outer bounds, in physical pixels.
    fn window_bounds(&self) -> HitboxResult<WindowRect>;

    /// Device pixel ratio of the display the window currently sits on.
    fn scale_factor(&self) -> HitboxResult<f64>;

    /// Toggle click-through. `true` forwards mouse input to whatever is
    /// beneath the window.
    fn set_ignore_cursor_events(&self, ignore: bool) -> HitboxResult<()>;
}

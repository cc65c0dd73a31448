//! Per-window passthrough coordinator.
//!
//! Owns everything one overlay window needs: the tracked rectangle, the
//! current scale factor, the hit tester and the passthrough controller. All
//! handlers take `&mut self` and run to completion; the coordinator is meant
//! to live on exactly one event loop.

use super::types::{Flow, OverlayEvent};
use crate::error::HitboxResult;
use crate::geometry::{
    CoordinateMapper, GeometryTracker, GlobalCursorSample, Position, Size, WindowRect,
};
use crate::hit_test::HitTester;
use crate::passthrough::{PassthroughController, PassthroughState};
use crate::platform::OverlayPlatform;

pub struct LayeredHitbox<P, H> {
    platform: P,
    hit_tester: H,
    geometry: GeometryTracker,
    controller: PassthroughController,
    scale: f64,
}

impl<P, H> LayeredHitbox<P, H>
where
    P: OverlayPlatform,
    H: HitTester,
{
    /// Declare the window as a layered hitbox.
    ///
    /// Reads the bounds and scale factor, then makes the window fully
    /// click-through before any cursor sample is looked at.
    pub fn declare(platform: P, hit_tester: H) -> HitboxResult<Self> {
        let geometry = GeometryTracker::initialize(&platform)?;
        let scale = platform.scale_factor()?;
        let controller = PassthroughController::initialize(&platform)?;

        log::info!(
            "[HITBOX] Declared layered hitbox at {:?} (scale {})",
            geometry.rect(),
            scale
        );

        Ok(Self {
            platform,
            hit_tester,
            geometry,
            controller,
            scale,
        })
    }

    pub fn on_moved(&mut self, position: Position) {
        self.geometry.on_moved(position);
    }

    pub fn on_resized(&mut self, size: Size) {
        self.geometry.on_resized(size);
    }

    /// Replace the device pixel ratio used for mapping.
    ///
    /// Non-finite or non-positive factors are ignored; they would turn every
    /// local point into infinity or NaN.
    pub fn on_scale_changed(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("[HITBOX] Ignoring invalid scale factor {}", scale);
            return;
        }
        self.scale = scale;
    }

    /// Run one evaluation cycle for a global cursor sample.
    ///
    /// Samples outside the window leave the state untouched. Returns the new
    /// state when the platform toggle was issued.
    pub fn on_cursor_moved(
        &mut self,
        sample: GlobalCursorSample,
    ) -> HitboxResult<Option<PassthroughState>> {
        let Some(point) = CoordinateMapper::to_local(sample, self.geometry.rect(), self.scale)
        else {
            log::trace!("[HITBOX] Sample {:?} outside window", sample);
            return Ok(None);
        };

        let class = self.hit_tester.classify(point);
        self.controller.apply(class, &self.platform)
    }

    /// Dispatch one event from the overlay's event loop.
    pub fn handle_event(&mut self, event: OverlayEvent) -> HitboxResult<Flow> {
        match event {
            OverlayEvent::Moved(position) => self.on_moved(position),
            OverlayEvent::Resized(size) => self.on_resized(size),
            OverlayEvent::ScaleChanged(scale) => self.on_scale_changed(scale),
            OverlayEvent::CursorMoved(sample) => {
                self.on_cursor_moved(sample)?;
            },
            OverlayEvent::Shutdown => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    pub fn rect(&self) -> WindowRect {
        self.geometry.rect()
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    pub fn state(&self) -> PassthroughState {
        self.controller.state()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn hit_tester(&self) -> &H {
        &self.hit_tester
    }
}

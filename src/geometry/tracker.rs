//! Tracks the overlay window's screen rectangle.
//!
//! Move and resize notifications arrive independently and may be late or out
//! of order. Each handler touches only its own fields; a missed event leaves
//! the rectangle stale until the next event of the same kind.

use super::types::{Position, Size, WindowRect};
use crate::error::HitboxResult;
use crate::platform::OverlayPlatform;

#[derive(Debug, Clone)]
pub struct GeometryTracker {
    rect: WindowRect,
}

impl GeometryTracker {
    /// Start tracking from a known rectangle.
    pub fn new(rect: WindowRect) -> Self {
        Self { rect }
    }

    /// Read the window's bounds from the platform once.
    pub fn initialize<P: OverlayPlatform + ?Sized>(platform: &P) -> HitboxResult<Self> {
        let rect = platform.window_bounds()?;
        log::debug!("[HITBOX] Initial window rect: {:?}", rect);
        Ok(Self::new(rect))
    }

    pub fn on_moved(&mut self, position: Position) {
        self.rect.x = position.x;
        self.rect.y = position.y;
    }

    pub fn on_resized(&mut self, size: Size) {
        self.rect.width = size.width;
        self.rect.height = size.height;
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HitboxError;
    use crate::platform::testing::RecordingPlatform;

    #[test]
    fn initialize_reads_platform_bounds() {
        let platform = RecordingPlatform::new(WindowRect::new(5.0, 6.0, 300.0, 200.0), 1.0);
        let tracker = GeometryTracker::initialize(&platform).unwrap();
        assert_eq!(tracker.rect(), WindowRect::new(5.0, 6.0, 300.0, 200.0));
    }

    #[test]
    fn initialize_propagates_failure() {
        let platform = RecordingPlatform::default();
        platform.fail_bounds(true);
        let err = GeometryTracker::initialize(&platform).unwrap_err();
        assert!(matches!(err, HitboxError::Geometry(_)));
    }

    #[test]
    fn move_only_touches_position() {
        let mut tracker = GeometryTracker::new(WindowRect::new(0.0, 0.0, 100.0, 50.0));
        tracker.on_moved(Position::new(40.0, -10.0));
        assert_eq!(tracker.rect(), WindowRect::new(40.0, -10.0, 100.0, 50.0));
    }

    #[test]
    fn resize_only_touches_size() {
        let mut tracker = GeometryTracker::new(WindowRect::new(7.0, 8.0, 100.0, 50.0));
        tracker.on_resized(Size::new(0.0, -3.0));
        assert_eq!(tracker.rect(), WindowRect::new(7.0, 8.0, 0.0, -3.0));
    }
}

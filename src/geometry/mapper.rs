//! Global physical pixels to window-local logical pixels.

use super::types::{GlobalCursorSample, LocalPoint, WindowRect};

/// Stateless converter from the cursor hook's space into the window's
/// content space.
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Map a global sample into local coordinates.
    ///
    /// Returns `None` when the sample lies outside `rect` (edges inclusive).
    /// Samples are physical pixels and content is laid out in logical
    /// pixels, so the offset is divided by `scale`.
    pub fn to_local(sample: GlobalCursorSample, rect: WindowRect, scale: f64) -> Option<LocalPoint> {
        if !rect.contains(sample.x, sample.y) {
            return None;
        }

        Some(LocalPoint::new(
            (sample.x - rect.x) / scale,
            (sample.y - rect.y) / scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_with_scale() {
        let rect = WindowRect::new(10.0, 10.0, 200.0, 100.0);
        let local = CoordinateMapper::to_local(GlobalCursorSample::new(110.0, 60.0), rect, 2.0);
        assert_eq!(local, Some(LocalPoint::new(50.0, 25.0)));
    }

    #[test]
    fn unit_scale_is_plain_offset() {
        let rect = WindowRect::new(-1920.0, 0.0, 1920.0, 1080.0);
        let local = CoordinateMapper::to_local(GlobalCursorSample::new(-1900.0, 40.0), rect, 1.0);
        assert_eq!(local, Some(LocalPoint::new(20.0, 40.0)));
    }

    #[test]
    fn edges_are_inside() {
        let rect = WindowRect::new(10.0, 10.0, 200.0, 100.0);
        assert_eq!(
            CoordinateMapper::to_local(GlobalCursorSample::new(10.0, 10.0), rect, 1.0),
            Some(LocalPoint::new(0.0, 0.0))
        );
        assert_eq!(
            CoordinateMapper::to_local(GlobalCursorSample::new(210.0, 110.0), rect, 2.0),
            Some(LocalPoint::new(100.0, 50.0))
        );
    }

    #[test]
    fn outside_is_none() {
        let rect = WindowRect::new(10.0, 10.0, 200.0, 100.0);
        for (x, y) in [(9.0, 50.0), (211.0, 50.0), (50.0, 9.0), (50.0, 111.0)] {
            assert_eq!(
                CoordinateMapper::to_local(GlobalCursorSample::new(x, y), rect, 1.0),
                None,
                "({x}, {y}) should be outside"
            );
        }
    }
}

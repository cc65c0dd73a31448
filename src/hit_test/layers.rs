//! Region-backed hit tester.
//!
//! The renderer publishes the bounding boxes of its interactive elements in
//! local logical pixels. Anything not covered by a region is background.
//! Regions are replaced wholesale on each publish, so readers never observe a
//! half-updated layout.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{HitClass, HitTester};
use crate::geometry::LocalPoint;

/// Bounding box of one rendered element, in local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HitboxRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitboxRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges inclusive. Degenerate regions contain nothing.
    pub fn contains(&self, point: LocalPoint) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Shared, cloneable set of content regions for one overlay window.
///
/// Written from IPC handlers, read from the overlay event loop.
#[derive(Debug, Clone, Default)]
pub struct HitboxLayers {
    regions: Arc<RwLock<Vec<HitboxRegion>>>,
}

impl HitboxLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regions(regions: Vec<HitboxRegion>) -> Self {
        Self {
            regions: Arc::new(RwLock::new(regions)),
        }
    }

    /// Replace all regions at once.
    pub fn set_regions(&self, regions: Vec<HitboxRegion>) {
        log::trace!("[HITBOX] Publishing {} content regions", regions.len());
        *self.regions.write() = regions;
    }

    pub fn clear(&self) {
        self.regions.write().clear();
    }

    /// Snapshot of the current regions.
    pub fn regions(&self) -> Vec<HitboxRegion> {
        self.regions.read().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.read().is_empty()
    }
}

impl HitTester for HitboxLayers {
    fn classify(&self, point: LocalPoint) -> HitClass {
        if self.regions.read().iter().any(|r| r.contains(point)) {
            HitClass::Content
        } else {
            HitClass::Background
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layers_are_background() {
        let layers = HitboxLayers::new();
        assert!(layers.is_empty());
        assert_eq!(
            layers.classify(LocalPoint::new(1.0, 1.0)),
            HitClass::Background
        );
    }

    #[test]
    fn point_in_any_region_is_content() {
        let layers = HitboxLayers::with_regions(vec![
            HitboxRegion::new(0.0, 0.0, 40.0, 20.0),
            HitboxRegion::new(100.0, 100.0, 10.0, 10.0),
        ]);

        assert_eq!(layers.classify(LocalPoint::new(20.0, 10.0)), HitClass::Content);
        assert_eq!(layers.classify(LocalPoint::new(110.0, 110.0)), HitClass::Content);
        assert_eq!(layers.classify(LocalPoint::new(60.0, 60.0)), HitClass::Background);
    }

    #[test]
    fn degenerate_regions_never_hit() {
        let layers = HitboxLayers::with_regions(vec![
            HitboxRegion::new(0.0, 0.0, 0.0, 50.0),
            HitboxRegion::new(0.0, 0.0, 50.0, -1.0),
        ]);
        assert_eq!(layers.classify(LocalPoint::new(0.0, 0.0)), HitClass::Background);
    }

    #[test]
    fn clones_share_regions() {
        let layers = HitboxLayers::new();
        let writer = layers.clone();

        writer.set_regions(vec![HitboxRegion::new(0.0, 0.0, 10.0, 10.0)]);
        assert_eq!(layers.classify(LocalPoint::new(5.0, 5.0)), HitClass::Content);

        writer.clear();
        assert_eq!(layers.classify(LocalPoint::new(5.0, 5.0)), HitClass::Background);
        assert!(layers.regions().is_empty());
    }

    #[test]
    fn region_json_is_camel_case() {
        let region: HitboxRegion =
            serde_json::from_str(r#"{"x":1,"y":2,"width":3,"height":4}"#).unwrap();
        assert_eq!(region, HitboxRegion::new(1.0, 2.0, 3.0, 4.0));
    }
}

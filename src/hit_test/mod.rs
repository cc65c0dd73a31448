//! Content hit-testing.
//!
//! A hit test answers one question: is anything interactive drawn at this
//! local point? There is no alpha or opacity-mask testing. A point is either
//! over the window's bare background surface or over rendered content.

mod layers;

pub use layers::{HitboxLayers, HitboxRegion};

use crate::geometry::LocalPoint;

/// Classification of a local point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitClass {
    /// Some rendered UI element occupies the point.
    Content,
    /// Only the root/background surface is there.
    Background,
}

impl HitClass {
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content)
    }
}

/// "What is drawn at this pixel" primitive supplied by the rendering layer.
pub trait HitTester {
    fn classify(&self, point: LocalPoint) -> HitClass;
}

impl<F> HitTester for F
where
    F: Fn(LocalPoint) -> HitClass,
{
    fn classify(&self, point: LocalPoint) -> HitClass {
        self(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_hit_testers() {
        let left_half = |p: LocalPoint| {
            if p.x < 50.0 {
                HitClass::Content
            } else {
                HitClass::Background
            }
        };

        assert_eq!(left_half.classify(LocalPoint::new(10.0, 0.0)), HitClass::Content);
        assert_eq!(left_half.classify(LocalPoint::new(60.0, 0.0)), HitClass::Background);
    }

    #[test]
    fn boxed_closure_is_a_hit_tester() {
        let tester: Box<dyn Fn(LocalPoint) -> HitClass> = Box::new(|_| HitClass::Content);
        assert!(tester.classify(LocalPoint::default()).is_content());
    }
}

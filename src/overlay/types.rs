use crate::geometry::{GlobalCursorSample, Position, Size};

/// Everything that can reach an overlay's event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// Platform move notification (outer position, physical pixels).
    Moved(Position),
    /// Platform resize notification (outer size, physical pixels).
    Resized(Size),
    /// The window landed on a display with a different device pixel ratio.
    ScaleChanged(f64),
    /// One sample from the global cursor broadcast.
    CursorMoved(GlobalCursorSample),
    /// Stop the loop. No further platform calls are made.
    Shutdown,
}

impl OverlayEvent {
    pub fn is_cursor(&self) -> bool {
        matches!(self, Self::CursorMoved(_))
    }
}

/// Whether the event loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

//! Window geometry and the global-to-local coordinate transform.
//!
//! ```text
//! geometry/
//!   types.rs   - WindowRect, cursor samples, local points
//!   tracker.rs - GeometryTracker (move/resize bookkeeping)
//!   mapper.rs  - CoordinateMapper (global physical -> local logical)
//! ```

mod mapper;
mod tracker;
mod types;

pub use mapper::CoordinateMapper;
pub use tracker::GeometryTracker;
pub use types::{GlobalCursorSample, LocalPoint, Position, Size, WindowRect};

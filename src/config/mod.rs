//! Application configuration management.
//!
//! Overlay settings live in a single typed struct behind a
//! `parking_lot::RwLock`, so the frontend can replace them atomically in one
//! IPC call and the event loops read a consistent snapshot.

pub mod overlay;

pub use overlay::{OverlayConfig, OVERLAY_CONFIG};

//! Tauri integration (feature `tauri`).
//!
//! ```text
//! commands/
//!   hitbox.rs   - WebviewWindow platform impl, overlay registry, hitbox commands
//!   settings.rs - overlay config commands
//! ```
//!
//! Register the commands in the host's `generate_handler!` and call
//! [`hitbox::init`] from its `setup` hook.

pub mod hitbox;
pub mod settings;

pub use hitbox::{declare_layered_hitbox, init, GLOBAL_MOUSE_MOVE_EVENT};

//! Passthrough state and the controller that owns the platform toggle.

mod controller;
mod state;

pub use controller::PassthroughController;
pub use state::PassthroughState;

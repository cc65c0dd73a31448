//! Global cursor stream.
//!
//! - `broadcast`: process-wide fan-out of cursor samples to all overlays
//! - `listener`: one window's subscription, detached on drop
//! - `poller`: device_query sampling thread (feature `global-cursor`)

mod broadcast;
mod listener;
#[cfg(feature = "global-cursor")]
mod poller;

pub use broadcast::{CursorBroadcaster, SubscriptionId};
pub use listener::CursorBroadcastListener;
#[cfg(feature = "global-cursor")]
pub use poller::{spawn_cursor_poller, CursorPoller};

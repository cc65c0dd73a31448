//! Capture/passthrough state machine.
//!
//! ```text
//!             Content
//!  Passthrough ------> Capturing      set_ignore_cursor_events(false)
//!  Passthrough <------ Capturing      set_ignore_cursor_events(true)
//!             Background
//! ```
//!
//! Any classification that matches the current state is a no-op. The
//! platform is called at most once per transition, however many samples
//! arrive in the same region.

use super::PassthroughState;
use crate::error::HitboxResult;
use crate::hit_test::HitClass;
use crate::platform::OverlayPlatform;

#[derive(Debug)]
pub struct PassthroughController {
    state: PassthroughState,
}

impl PassthroughController {
    /// Enter `Passthrough` with the mandatory initial platform call.
    pub fn initialize<P: OverlayPlatform + ?Sized>(platform: &P) -> HitboxResult<Self> {
        let state = PassthroughState::Passthrough;
        platform.set_ignore_cursor_events(state.ignores_cursor())?;
        Ok(Self { state })
    }

    pub fn state(&self) -> PassthroughState {
        self.state
    }

    /// Apply one classification.
    ///
    /// Returns the new state when a transition happened. The state is only
    /// committed after the platform accepted the toggle; on failure it keeps
    /// describing what the platform last acknowledged.
    pub fn apply<P: OverlayPlatform + ?Sized>(
        &mut self,
        class: HitClass,
        platform: &P,
    ) -> HitboxResult<Option<PassthroughState>> {
        let next = match (class, self.state) {
            (HitClass::Content, PassthroughState::Passthrough) => PassthroughState::Capturing,
            (HitClass::Background, PassthroughState::Capturing) => PassthroughState::Passthrough,
            _ => return Ok(None),
        };

        if let Err(e) = platform.set_ignore_cursor_events(next.ignores_cursor()) {
            log::error!(
                "[HITBOX] Failed to switch {:?} -> {:?}: {}",
                self.state,
                next,
                e
            );
            return Err(e);
        }

        log::debug!("[HITBOX] {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(Some(next))
    }
}

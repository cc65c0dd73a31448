use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the overlay currently captures mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PassthroughState {
    /// Input is delivered to the overlay.
    Capturing,
    /// Input falls through to whatever is beneath the overlay.
    #[default]
    Passthrough,
}

impl PassthroughState {
    /// Argument for the platform's "ignore cursor events" toggle.
    pub fn ignores_cursor(&self) -> bool {
        matches!(self, Self::Passthrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_passthrough() {
        assert_eq!(PassthroughState::default(), PassthroughState::Passthrough);
        assert!(PassthroughState::default().ignores_cursor());
        assert!(!PassthroughState::Capturing.ignores_cursor());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&PassthroughState::Capturing).unwrap();
        assert_eq!(json, "\"capturing\"");
    }
}

//! Central error types for the overlay hitbox.
//!
//! The three inputs (geometry, cursor samples, hit tests) are trusted signals,
//! so the taxonomy is narrow. Platform failures are fatal to the window they
//! belong to and are propagated, never retried.
//! All errors implement `Serialize` for Tauri IPC compatibility.

use serde::Serialize;
use thiserror::Error;

/// Main error type for overlay hitbox operations.
#[derive(Error, Debug)]
pub enum HitboxError {
    /// Initial window bounds could not be read
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// The platform rejected a cursor-ignore toggle or scale query
    #[error("Platform error: {0}")]
    Platform(String),

    /// Config file read/write failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The overlay event loop has already stopped
    #[error("Overlay event loop is no longer running")]
    ChannelClosed,

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Tauri requires errors to be serializable to send to the frontend.
impl Serialize for HitboxError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<String> for HitboxError {
    fn from(msg: String) -> Self {
        HitboxError::Other(msg)
    }
}

impl From<&str> for HitboxError {
    fn from(msg: &str) -> Self {
        HitboxError::Other(msg.to_string())
    }
}

impl<T> From<flume::SendError<T>> for HitboxError {
    fn from(_: flume::SendError<T>) -> Self {
        HitboxError::ChannelClosed
    }
}

/// Extension trait for adding context to Option types.
pub trait OptionExt<T> {
    /// Convert None to HitboxError::Other with the given message.
    fn context(self, msg: &str) -> HitboxResult<T>;

    /// Convert None to HitboxError::Other with a lazily evaluated message.
    fn with_context<F: FnOnce() -> String>(self, f: F) -> HitboxResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context(self, msg: &str) -> HitboxResult<T> {
        self.ok_or_else(|| HitboxError::Other(msg.to_string()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> HitboxResult<T> {
        self.ok_or_else(|| HitboxError::Other(f()))
    }
}

/// Type alias for Results using HitboxError.
pub type HitboxResult<T> = Result<T, HitboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HitboxError::Platform("setIgnoreCursorEvents failed".to_string());
        assert_eq!(err.to_string(), "Platform error: setIgnoreCursorEvents failed");

        let geo = HitboxError::Geometry("window gone".to_string());
        assert!(geo.to_string().starts_with("Geometry error"));
    }

    #[test]
    fn test_error_serialization() {
        let err = HitboxError::ChannelClosed;
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("no longer running"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HitboxError = io_err.into();
        assert!(matches!(err, HitboxError::Io(_)));
    }

    #[test]
    fn test_from_send_error() {
        let (tx, rx) = flume::unbounded::<u8>();
        drop(rx);
        let err: HitboxError = tx.send(1).unwrap_err().into();
        assert!(matches!(err, HitboxError::ChannelClosed));
    }

    #[test]
    fn test_from_string() {
        let err: HitboxError = "test error".into();
        assert!(matches!(err, HitboxError::Other(_)));
    }

    #[test]
    fn test_option_ext_context() {
        let opt: Option<i32> = None;
        let result = opt.context("value was missing");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("value was missing"));
    }

    #[test]
    fn test_option_ext_with_context() {
        let opt: Option<i32> = None;
        let msg = opt
            .with_context(|| format!("no overlay labelled {}", "bar"))
            .unwrap_err()
            .to_string();
        assert!(msg.contains("no overlay labelled bar"));
    }
}

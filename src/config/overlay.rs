//! Overlay hitbox configuration.
//!
//! Consolidates the tunables of the cursor stream and the overlay event loop
//! into one typed struct with thread-safe access via RwLock.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::HitboxResult;

/// Lower bound for the cursor poll interval (250Hz).
pub const MIN_POLL_INTERVAL_MS: u64 = 4;

/// Upper bound for the cursor poll interval (4Hz).
pub const MAX_POLL_INTERVAL_MS: u64 = 250;

/// Centralized overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct OverlayConfig {
    /// Global cursor sampling interval in milliseconds (4-250).
    #[ts(type = "number")]
    pub cursor_poll_interval_ms: u64,

    /// Also emit each global cursor sample to every webview.
    pub broadcast_to_webviews: bool,

    /// Collapse queued runs of cursor samples to the most recent one.
    ///
    /// Off by default: every sample is evaluated. When on, a skipped
    /// in-window sample followed by an out-of-window one can leave the
    /// overlay in a different state than per-sample evaluation would.
    pub coalesce_cursor_samples: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            cursor_poll_interval_ms: 16, // ~60Hz
            broadcast_to_webviews: true,
            coalesce_cursor_samples: false,
        }
    }
}

impl OverlayConfig {
    /// Clamp settings to acceptable ranges.
    pub fn validate(&mut self) {
        self.cursor_poll_interval_ms = self
            .cursor_poll_interval_ms
            .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS);
    }

    /// Reset all settings to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load_from_path(path: &Path) -> HitboxResult<Self> {
        let json = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&json)?;
        config.validate();
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> HitboxResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

lazy_static! {
    /// Global overlay configuration.
    ///
    /// # Example
    /// ```ignore
    /// let interval = OVERLAY_CONFIG.read().cursor_poll_interval_ms;
    ///
    /// {
    ///     let mut config = OVERLAY_CONFIG.write();
    ///     config.coalesce_cursor_samples = true;
    /// }
    /// ```
    pub static ref OVERLAY_CONFIG: RwLock<OverlayConfig> = RwLock::new(OverlayConfig::default());
}

// ============================================================================
// Getters
// ============================================================================

pub fn get_overlay_config() -> OverlayConfig {
    OVERLAY_CONFIG.read().clone()
}

pub fn get_cursor_poll_interval_ms() -> u64 {
    OVERLAY_CONFIG.read().cursor_poll_interval_ms
}

pub fn get_broadcast_to_webviews() -> bool {
    OVERLAY_CONFIG.read().broadcast_to_webviews
}

pub fn get_coalesce_cursor_samples() -> bool {
    OVERLAY_CONFIG.read().coalesce_cursor_samples
}

/// Validate and store a new configuration.
pub fn set_overlay_config(mut config: OverlayConfig) {
    config.validate();
    log::debug!("[CONFIG] Overlay config updated: {:?}", config);
    *OVERLAY_CONFIG.write() = config;
}

pub fn reset_overlay_config() {
    OVERLAY_CONFIG.write().reset();
    log::debug!("[CONFIG] Overlay settings reset to defaults");
}

/// Load the global configuration from disk, keeping defaults if the file
/// does not exist yet.
pub fn load_overlay_config(path: &Path) -> HitboxResult<OverlayConfig> {
    if !path.exists() {
        log::info!("[CONFIG] No config at {:?}, using defaults", path);
        return Ok(get_overlay_config());
    }
    let config = OverlayConfig::load_from_path(path)?;
    set_overlay_config(config.clone());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Serializes tests that touch `OVERLAY_CONFIG`.
    static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

    /// Per-test scratch directory so parallel tests never share files.
    fn scratch_dir(test: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("overlay-hitbox-{}-{}", std::process::id(), test))
    }

    #[test]
    fn test_default_config() {
        let config = OverlayConfig::default();
        assert_eq!(config.cursor_poll_interval_ms, 16);
        assert!(config.broadcast_to_webviews);
        assert!(!config.coalesce_cursor_samples);
    }

    #[test]
    fn test_validate_clamps_interval() {
        let mut config = OverlayConfig {
            cursor_poll_interval_ms: 0,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.cursor_poll_interval_ms, MIN_POLL_INTERVAL_MS);

        config.cursor_poll_interval_ms = 10_000;
        config.validate();
        assert_eq!(config.cursor_poll_interval_ms, MAX_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OverlayConfig =
            serde_json::from_str(r#"{"broadcastToWebviews":false}"#).unwrap();
        assert!(!config.broadcast_to_webviews);
        assert_eq!(config.cursor_poll_interval_ms, 16);
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save_and_load");
        let path = dir.join("nested").join("overlay.json");
        let config = OverlayConfig {
            cursor_poll_interval_ms: 33,
            broadcast_to_webviews: false,
            coalesce_cursor_samples: false,
        };

        config.save_to_path(&path).unwrap();
        let loaded = OverlayConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_clamps() {
        let dir = scratch_dir("clamp");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("overlay.json");
        fs::write(&path, r#"{"cursorPollIntervalMs":1}"#).unwrap();

        let loaded = OverlayConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.cursor_poll_interval_ms, MIN_POLL_INTERVAL_MS);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = scratch_dir("broken");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("overlay.json");
        fs::write(&path, "{ not json").unwrap();

        let err = OverlayConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, crate::error::HitboxError::Json(_)));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = scratch_dir("missing").join("overlay.json");
        let err = OverlayConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, crate::error::HitboxError::Io(_)));
    }

    #[test]
    fn test_load_overlay_config_missing_file_keeps_current() {
        let _guard = GLOBAL_LOCK.lock();
        reset_overlay_config();

        let path = scratch_dir("global_missing").join("overlay.json");
        let loaded = load_overlay_config(&path).unwrap();

        assert_eq!(loaded, OverlayConfig::default());
        assert_eq!(get_overlay_config(), OverlayConfig::default());
    }

    #[test]
    fn test_load_overlay_config_applies_file() {
        let _guard = GLOBAL_LOCK.lock();
        let dir = scratch_dir("global_existing");
        let path = dir.join("overlay.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, r#"{"cursorPollIntervalMs":33,"coalesceCursorSamples":true}"#).unwrap();

        let loaded = load_overlay_config(&path).unwrap();

        assert_eq!(loaded.cursor_poll_interval_ms, 33);
        assert_eq!(get_cursor_poll_interval_ms(), 33);
        assert!(get_coalesce_cursor_samples());
        assert!(get_broadcast_to_webviews());

        reset_overlay_config();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_global_config() {
        let _guard = GLOBAL_LOCK.lock();
        set_overlay_config(OverlayConfig {
            cursor_poll_interval_ms: 1,
            broadcast_to_webviews: false,
            coalesce_cursor_samples: true,
        });
        assert_eq!(get_cursor_poll_interval_ms(), MIN_POLL_INTERVAL_MS);
        assert!(!get_broadcast_to_webviews());
        assert!(get_coalesce_cursor_samples());

        reset_overlay_config();
        assert_eq!(get_overlay_config(), OverlayConfig::default());
    }
}

use tauri::command;

use crate::config::overlay::{self, OverlayConfig};

/// Get the current overlay configuration.
#[command]
pub fn get_overlay_config() -> OverlayConfig {
    overlay::get_overlay_config()
}

/// Replace the overlay configuration (batch update from the frontend).
///
/// Poll interval and webview broadcasting take effect on the next `init`;
/// coalescing applies to overlays declared afterwards.
#[command]
pub fn set_overlay_config(config: OverlayConfig) {
    overlay::set_overlay_config(config);
}

/// Reset overlay configuration to defaults.
#[command]
pub fn reset_overlay_config() {
    overlay::reset_overlay_config();
}

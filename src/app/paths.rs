// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - the `--config-dir` flag, or a test directory
//! 2. **Environment variable** (`DP_FRAMER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Exports go to the user's download directory unless configured otherwise.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "DpFramer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DP_FRAMER_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/DpFramer/`
/// - macOS: `~/Library/Application Support/DpFramer/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\DpFramer\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Default destination for exported pictures.
///
/// The platform download directory, else the working directory.
#[must_use]
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

// SPDX-License-Identifier: MPL-2.0
//! Path resolution for the plugin's settings directory.
//!
//! Only hosts without their own blob store need this; they fall back to the
//! file-backed storage adapter, which writes into the directory returned here.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_config_dir_with_override`]
//! 2. **Environment variable** (`TITLE_CLIP_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Plugin name used for directory naming.
const APP_NAME: &str = "TitleClip";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TITLE_CLIP_CONFIG_DIR";

/// Returns the plugin config directory path.
///
/// # Resolution Order
///
/// 1. `TITLE_CLIP_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/TitleClip/`
///    - macOS: `~/Library/Application Support/TitleClip/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\TitleClip\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the plugin config directory path with an optional override.
///
/// The override takes highest priority; tests use it to stay isolated.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
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

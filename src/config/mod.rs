// SPDX-License-Identifier: MPL-2.0
//! This module handles the plugin settings, including merging a persisted
//! blob over the defaults and writing the full object back.
//!
//! # Merge Rules
//!
//! - Persisted values win for keys present in both the blob and the defaults.
//! - Defaults fill every key the blob lacks.
//! - A known key holding a value of the wrong type is logged and replaced by
//!   its default.
//! - Unknown keys are kept as-is and written back on the next save.
//!
//! # Examples
//!
//! ```
//! use title_clip::config::{Blob, Settings};
//!
//! let mut blob = Blob::new();
//! blob.insert("language".into(), toml::Value::String("es".into()));
//!
//! let settings = Settings::merged_over_defaults(Some(blob));
//! assert_eq!(settings.language, "es");
//! assert!(!settings.include_extension);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::application::port::SettingsStorage;
use crate::error::Result;

/// The opaque key-value object exchanged with the storage layer.
pub type Blob = toml::Table;

/// Plugin settings.
///
/// Always carries both defined options. Owned by the plugin instance and
/// only persisted through [`SettingsStore::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Keep the file extension in the copied title.
    pub include_extension: bool,

    /// UI language: `"auto"` or a locale code such as `"en"` or `"es"`.
    pub language: String,

    /// Persisted keys this version does not know about.
    pub extra: Blob,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_extension: DEFAULT_INCLUDE_EXTENSION,
            language: DEFAULT_LANGUAGE.to_string(),
            extra: Blob::new(),
        }
    }
}

impl Settings {
    /// Builds settings from a persisted blob, filling gaps with defaults.
    pub fn merged_over_defaults(blob: Option<Blob>) -> Self {
        let mut settings = Self::default();
        let Some(blob) = blob else {
            return settings;
        };

        for (key, value) in blob {
            match key.as_str() {
                KEY_INCLUDE_EXTENSION => match value.as_bool() {
                    Some(include) => settings.include_extension = include,
                    None => tracing::warn!(
                        key = KEY_INCLUDE_EXTENSION,
                        found = value.type_str(),
                        "ignoring persisted setting with unexpected type"
                    ),
                },
                KEY_LANGUAGE => match value.as_str() {
                    Some(language) => settings.language = language.to_string(),
                    None => tracing::warn!(
                        key = KEY_LANGUAGE,
                        found = value.type_str(),
                        "ignoring persisted setting with unexpected type"
                    ),
                },
                _ => {
                    settings.extra.insert(key, value);
                }
            }
        }

        settings
    }

    /// Produces the complete blob to persist, unknown keys included.
    pub fn to_blob(&self) -> Blob {
        let mut blob = self.extra.clone();
        blob.insert(
            KEY_INCLUDE_EXTENSION.to_string(),
            toml::Value::Boolean(self.include_extension),
        );
        blob.insert(
            KEY_LANGUAGE.to_string(),
            toml::Value::String(self.language.clone()),
        );
        blob
    }

    /// Returns `true` when the language follows the host locale.
    pub fn follows_host_language(&self) -> bool {
        self.language == AUTO_LANGUAGE
    }
}

/// Loads and saves [`Settings`] through a host-provided blob store.
pub struct SettingsStore {
    storage: Box<dyn SettingsStorage>,
}

impl SettingsStore {
    pub fn new(storage: Box<dyn SettingsStorage>) -> Self {
        Self { storage }
    }

    /// Loads the settings. Never fails: a read error counts as an empty blob.
    pub async fn load(&self) -> Settings {
        match self.storage.read_blob().await {
            Ok(blob) => Settings::merged_over_defaults(blob),
            Err(error) => {
                tracing::warn!(%error, "failed to read settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Persists the full settings object, replacing any previous blob.
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        self.storage.write_blob(&settings.to_blob()).await
    }
}

// =============================================================================
// Tests
// =============================================================================

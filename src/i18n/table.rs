// SPDX-License-Identifier: MPL-2.0
//! Locale table loading.
//!
//! Two strategies produce a [`LocaleTable`]:
//!
//! - **Embedded**: `assets/i18n/<locale>.json` compiled into the binary.
//! - **External**: one JSON file mapping locale codes to key/template maps,
//!   read with `tokio::fs` at startup. A missing or malformed file is logged
//!   and replaced by the built-in minimal table so the menu action keeps
//!   working.

use super::keys;
use crate::config::FALLBACK_LOCALE;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

type Entries = HashMap<String, String>;

/// Built-in strings covering the keys the menu action needs.
const MINIMAL: &[(&str, &str, &str)] = &[
    ("en", keys::COPY_NOTE_TITLE, "Copy note title"),
    ("en", keys::TITLE_COPIED, "Title copied: {title}"),
    ("es", keys::COPY_NOTE_TITLE, "Copiar título de la nota"),
    ("es", keys::TITLE_COPIED, "Título copiado: {title}"),
];

/// Where the locale table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleSource {
    /// Resources compiled into the binary.
    #[default]
    Embedded,
    /// A JSON file read at startup.
    File(PathBuf),
}

impl LocaleSource {
    /// Loads the table. Never fails; see [`LocaleTable::load_or_fallback`].
    pub async fn load(&self) -> LocaleTable {
        match self {
            LocaleSource::Embedded => LocaleTable::embedded(),
            LocaleSource::File(path) => LocaleTable::load_or_fallback(path).await,
        }
    }
}

/// Mapping from locale code to translation key to template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    locales: HashMap<String, Entries>,
}

impl LocaleTable {
    /// The built-in subset: `copy_note_title` and `title_copied` in `en` and `es`.
    pub fn minimal() -> Self {
        let mut locales: HashMap<String, Entries> = HashMap::new();
        for (locale, key, text) in MINIMAL {
            locales
                .entry((*locale).to_string())
                .or_default()
                .insert((*key).to_string(), (*text).to_string());
        }
        Self { locales }
    }

    /// Loads every embedded `<locale>.json` resource over the minimal table.
    ///
    /// A resource that fails to parse is logged and skipped.
    pub fn embedded() -> Self {
        let mut table = Self::minimal();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".json") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping locale resource with invalid name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match serde_json::from_slice::<Entries>(content.data.as_ref()) {
                Ok(entries) => table.extend_locale(&locale.to_string(), entries),
                Err(error) => {
                    tracing::error!(filename, %error, "failed to parse embedded locale resource");
                }
            }
        }

        table
    }

    /// Parses a flat two-level JSON map (`{"en": {"key": "text"}}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocaleResource`] if the JSON is malformed or has no
    /// `en` entry.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let locales: HashMap<String, Entries> = serde_json::from_str(json)?;
        if !locales.contains_key(FALLBACK_LOCALE) {
            return Err(Error::LocaleResource(format!(
                "missing `{FALLBACK_LOCALE}` locale"
            )));
        }
        Ok(Self { locales })
    }

    /// Reads and parses an external locale resource.
    ///
    /// Gaps in the `en` entry are filled from the embedded English strings.
    pub async fn load_from_path(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| Error::LocaleResource(format!("{}: {error}", path.display())))?;
        let mut table = Self::from_json_str(&content)?;
        table.backfill_fallback(&Self::embedded());
        Ok(table)
    }

    /// Loads an external resource, degrading to [`LocaleTable::minimal`] on
    /// any failure.
    pub async fn load_or_fallback(path: &Path) -> Self {
        match Self::load_from_path(path).await {
            Ok(table) => table,
            Err(error) => {
                tracing::error!(
                    path = %path.display(),
                    %error,
                    "locale resource unavailable, using built-in strings"
                );
                Self::minimal()
            }
        }
    }

    /// Looks up `key` in `locale` only. No fallback.
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale codes present in the table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Keys of one locale, sorted. Empty for unknown locales.
    pub fn keys(&self, locale: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .locales
            .get(locale)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    fn extend_locale(&mut self, locale: &str, entries: Entries) {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .extend(entries);
    }

    fn backfill_fallback(&mut self, source: &LocaleTable) {
        let Some(source_entries) = source.locales.get(FALLBACK_LOCALE) else {
            return;
        };
        let target = self.locales.entry(FALLBACK_LOCALE.to_string()).or_default();
        for (key, text) in source_entries {
            if !target.contains_key(key) {
                tracing::debug!(key = key.as_str(), "filling fallback locale gap");
                target.insert(key.clone(), text.clone());
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the plugin.
//!
//! This module resolves the active locale and looks up user-facing strings.
//!
//! # Features
//!
//! - Active locale from the explicit setting, or from the host locale tag
//!   when the setting is `"auto"`
//! - Embedded or external JSON locale tables (see [`table`])
//! - Fallback to English when the active locale lacks a key
//! - Single `{title}` placeholder substitution for notices

pub mod keys;
pub mod table;

pub use table::{LocaleSource, LocaleTable};

use crate::config::{Settings, FALLBACK_LOCALE};
use crate::error::{Error, Result};

/// Placeholder replaced by [`fill_title`].
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Derives the active locale code.
///
/// An explicit language is returned verbatim, even if the table has no such
/// locale; lookups then fall back to English. For `"auto"`, the primary
/// subtag of `host_locale_tag` selects Spanish when it is exactly `"es"` and
/// English otherwise.
pub fn resolve_language(settings: &Settings, host_locale_tag: &str) -> String {
    if !settings.follows_host_language() {
        return settings.language.clone();
    }

    let primary = host_locale_tag
        .split_once('-')
        .map_or(host_locale_tag, |(primary, _)| primary);

    if primary == "es" {
        "es".to_string()
    } else {
        FALLBACK_LOCALE.to_string()
    }
}

/// Replaces the first `{title}` in `template` with `title`, literally.
pub fn fill_title(template: &str, title: &str) -> String {
    template.replacen(TITLE_PLACEHOLDER, title, 1)
}

/// Translator bound to one locale table and the active locale.
pub struct I18n {
    table: LocaleTable,
    current_locale: String,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(LocaleTable::embedded(), FALLBACK_LOCALE)
    }
}

impl I18n {
    pub fn new(table: LocaleTable, locale: impl Into<String>) -> Self {
        Self {
            table,
            current_locale: locale.into(),
        }
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.current_locale = locale.into();
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Looks up `key` in `locale`, then in English.
    ///
    /// Returns `None` only when neither has the key.
    pub fn translate(&self, locale: &str, key: &str) -> Option<&str> {
        self.table
            .get(locale, key)
            .or_else(|| self.table.get(FALLBACK_LOCALE, key))
    }

    /// Translates `key` for the active locale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTranslation`] when neither the active locale
    /// nor English has the key.
    pub fn try_tr(&self, key: &str) -> Result<&str> {
        self.translate(&self.current_locale, key)
            .ok_or_else(|| Error::MissingTranslation(key.to_string()))
    }

    /// Translates `key` for the active locale.
    ///
    /// A missing key is logged and returned as-is, so UI text is never empty.
    pub fn tr(&self, key: &str) -> String {
        match self.try_tr(key) {
            Ok(text) => text.to_string(),
            Err(error) => {
                tracing::warn!(
                    %error,
                    locale = self.current_locale.as_str(),
                    "using key as text"
                );
                key.to_string()
            }
        }
    }

    /// Translates `key` and substitutes `title` into it.
    pub fn tr_with_title(&self, key: &str, title: &str) -> String {
        fill_title(&self.tr(key), title)
    }
}

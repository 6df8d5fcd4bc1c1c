// SPDX-License-Identifier: MPL-2.0
//! Startup flags handed to the plugin by its host.

use crate::application::port::{LocaleProvider, SettingsStorage};
use crate::i18n::LocaleSource;
use crate::infrastructure::{MemoryStorage, SystemLocale};
use std::fmt;

/// Host capabilities and options the plugin is loaded with.
pub struct Flags {
    pub storage: Box<dyn SettingsStorage>,
    pub locale_provider: Box<dyn LocaleProvider>,
    pub locale_source: LocaleSource,
}

impl Flags {
    pub fn new(
        storage: Box<dyn SettingsStorage>,
        locale_provider: Box<dyn LocaleProvider>,
    ) -> Self {
        Self {
            storage,
            locale_provider,
            locale_source: LocaleSource::default(),
        }
    }

    #[must_use]
    pub fn with_locale_source(mut self, source: LocaleSource) -> Self {
        self.locale_source = source;
        self
    }
}

impl Default for Flags {
    /// In-memory storage and the OS locale.
    fn default() -> Self {
        Self::new(Box::new(MemoryStorage::new()), Box::new(SystemLocale))
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("locale_source", &self.locale_source)
            .finish_non_exhaustive()
    }
}

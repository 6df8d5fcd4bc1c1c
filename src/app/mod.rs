// SPDX-License-Identifier: MPL-2.0
//! Plugin root state and lifecycle.
//!
//! [`TitleClip`] owns the settings, the translator and the host capabilities.
//! The file menu and the settings panel borrow it; every settings change goes
//! through [`TitleClip::save_settings`], which persists first, then recomputes
//! the active locale, then signals listeners to refresh.

mod menu;
mod message;
pub mod paths;
mod persistence;

pub use menu::{note_title, COPY_ICON};
pub use message::Flags;

use crate::application::port::LocaleProvider;
use crate::config::{Settings, SettingsStore};
use crate::i18n::{resolve_language, I18n};
use std::fmt;
use tokio::sync::watch;

/// A loaded plugin instance.
pub struct TitleClip {
    settings: Settings,
    store: SettingsStore,
    locale_provider: Box<dyn LocaleProvider>,
    i18n: I18n,
    /// Carries the active locale; bumped after every successful save.
    refresh: watch::Sender<String>,
}

impl fmt::Debug for TitleClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleClip")
            .field("settings", &self.settings)
            .field("active_locale", &self.i18n.current_locale())
            .finish_non_exhaustive()
    }
}

impl TitleClip {
    /// Loads settings and strings and resolves the active locale.
    pub async fn on_load(flags: Flags) -> Self {
        let store = SettingsStore::new(flags.storage);
        let settings = store.load().await;
        let table = flags.locale_source.load().await;
        let locale = resolve_language(&settings, &flags.locale_provider.locale_tag());
        let (refresh, _) = watch::channel(locale.clone());

        tracing::info!(
            locale = locale.as_str(),
            include_extension = settings.include_extension,
            "TitleClip plugin loaded"
        );

        Self {
            settings,
            store,
            locale_provider: flags.locale_provider,
            i18n: I18n::new(table, locale),
            refresh,
        }
    }

    pub fn on_unload(&self) {
        tracing::info!("TitleClip plugin unloaded");
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn active_locale(&self) -> &str {
        self.i18n.current_locale()
    }

    /// Translates `key` for the active locale.
    pub fn tr(&self, key: &str) -> String {
        self.i18n.tr(key)
    }

    /// Receives the active locale after every successful settings save.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.refresh.subscribe()
    }

    fn refresh_locale(&mut self) {
        let locale = resolve_language(&self.settings, &self.locale_provider.locale_tag());
        self.i18n.set_locale(locale.clone());
        self.refresh.send_replace(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Blob;
    use crate::i18n::keys;
    use crate::infrastructure::{FixedLocale, MemoryStorage};

    fn flags_with(blob: Option<Blob>, tag: &str) -> Flags {
        let storage = match blob {
            Some(blob) => MemoryStorage::with_blob(blob),
            None => MemoryStorage::new(),
        };
        Flags::new(Box::new(storage), Box::new(FixedLocale::new(tag)))
    }

    #[tokio::test]
    async fn first_load_uses_defaults_and_host_locale() {
        let plugin = TitleClip::on_load(flags_with(None, "es-ES")).await;
        assert_eq!(plugin.settings(), &Settings::default());
        assert_eq!(plugin.active_locale(), "es");
        assert_eq!(plugin.tr(keys::COPY_NOTE_TITLE), "Copiar título de la nota");
    }

    #[tokio::test]
    async fn persisted_language_overrides_host_locale() {
        let mut blob = Blob::new();
        blob.insert("language".into(), toml::Value::String("en".into()));
        let plugin = TitleClip::on_load(flags_with(Some(blob), "es-ES")).await;
        assert_eq!(plugin.active_locale(), "en");
    }

    #[tokio::test]
    async fn subscriber_starts_with_active_locale() {
        let plugin = TitleClip::on_load(flags_with(None, "de-DE")).await;
        let receiver = plugin.subscribe();
        assert_eq!(*receiver.borrow(), "en");
    }

    #[tokio::test]
    async fn debug_output_names_active_locale() {
        let plugin = TitleClip::on_load(flags_with(None, "es-ES")).await;
        let rendered = format!("{plugin:?}");
        assert!(rendered.contains("active_locale"));
        plugin.on_unload();
    }
}

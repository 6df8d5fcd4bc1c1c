// SPDX-License-Identifier: MPL-2.0
//! Settings panel for the plugin.
//!
//! [`view`] describes the panel as plain rows the host renders; controls
//! report back through [`Message`] values that [`update`] applies with a
//! read-modify-write save. All labels come from the translator, except the
//! language names, which stay in their own language.
//!
//! # Examples
//!
//! ```no_run
//! use title_clip::app::{Flags, TitleClip};
//! use title_clip::ui::settings::{self, Message};
//!
//! # async fn demo() {
//! let mut plugin = TitleClip::on_load(Flags::default()).await;
//!
//! let panel = settings::view(&plugin);
//! // ... render `panel.rows` in the host container
//!
//! let effect = settings::update(&mut plugin, Message::LanguageSelected("es".into())).await;
//! if effect.redraw {
//!     let _panel = settings::view(&plugin);
//! }
//! # }
//! ```

use crate::app::TitleClip;
use crate::config::AUTO_LANGUAGE;
use crate::i18n::keys;
use crate::ui::notifications::Notification;

/// Language dropdown entries: value and display label.
pub const LANGUAGE_OPTIONS: &[(&str, &str)] = &[
    (AUTO_LANGUAGE, "Auto (based on system)"),
    ("en", "English"),
    ("es", "Español"),
];

pub const SUPPORT_URL: &str = "https://ko-fi.com/jvfldd";
pub const SUPPORT_IMAGE_URL: &str = "https://storage.ko-fi.com/cdn/kofi5.png?v=6";
pub const SUPPORT_IMAGE_ALT: &str = "Buy Me a Coffee at Ko-fi.com";
pub const SUPPORT_IMAGE_WIDTH: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    IncludeExtensionToggled(bool),
    LanguageSelected(String),
    ResetRequested,
}

/// Input control attached to a setting row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Toggle {
        value: bool,
    },
    Dropdown {
        options: Vec<(String, String)>,
        selected: String,
    },
    Button {
        label: String,
        /// Rendered with the host's warning style.
        warning: bool,
        on_press: Message,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Heading(String),
    Paragraph(String),
    Setting {
        name: String,
        description: String,
        control: Option<Control>,
    },
    ImageLink {
        href: &'static str,
        image_src: &'static str,
        alt: &'static str,
        width: u32,
    },
}

/// Panel content, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsView {
    pub rows: Vec<Row>,
}

/// What the host should do after [`update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effect {
    /// Rebuild the panel with [`view`].
    pub redraw: bool,
    /// Notice to show, if any.
    pub notification: Option<Notification>,
}

pub fn view(plugin: &TitleClip) -> SettingsView {
    let settings = plugin.settings();
    let setting = |name: &str, description: &str, control: Option<Control>| Row::Setting {
        name: plugin.tr(name),
        description: plugin.tr(description),
        control,
    };

    let rows = vec![
        Row::Heading(plugin.tr(keys::SETTINGS_TITLE)),
        Row::Paragraph(plugin.tr(keys::SETTINGS_DESC)),
        setting(
            keys::INCLUDE_EXTENSION,
            keys::INCLUDE_EXTENSION_DESC,
            Some(Control::Toggle {
                value: settings.include_extension,
            }),
        ),
        setting(
            keys::LANGUAGE_SELECTION,
            keys::LANGUAGE_SELECTION_DESC,
            Some(Control::Dropdown {
                options: LANGUAGE_OPTIONS
                    .iter()
                    .map(|(value, label)| ((*value).to_string(), (*label).to_string()))
                    .collect(),
                selected: settings.language.clone(),
            }),
        ),
        setting(
            keys::RESET_SETTINGS,
            keys::RESET_SETTINGS_DESC,
            Some(Control::Button {
                label: plugin.tr(keys::RESET_BUTTON),
                warning: true,
                on_press: Message::ResetRequested,
            }),
        ),
        setting(keys::SUPPORT_MY_WORK, keys::SUPPORT_MY_WORK_DESC, None),
        Row::ImageLink {
            href: SUPPORT_URL,
            image_src: SUPPORT_IMAGE_URL,
            alt: SUPPORT_IMAGE_ALT,
            width: SUPPORT_IMAGE_WIDTH,
        },
    ];

    SettingsView { rows }
}

/// Applies a panel message. A failed save is already logged by the plugin;
/// here it turns into an error notice and the panel is left as it was.
pub async fn update(plugin: &mut TitleClip, message: Message) -> Effect {
    let (result, redraw) = match message {
        Message::IncludeExtensionToggled(value) => (
            plugin.update_settings(|s| s.include_extension = value).await,
            false,
        ),
        Message::LanguageSelected(language) => (
            plugin.update_settings(|s| s.language = language).await,
            true,
        ),
        Message::ResetRequested => (plugin.reset_settings().await, true),
    };

    match result {
        Ok(()) => Effect {
            redraw,
            notification: None,
        },
        Err(error) => Effect {
            redraw: false,
            notification: error.i18n_key().map(Notification::error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::application::port::SettingsStorage;
    use crate::config::{Blob, Settings};
    use crate::error::{Error, Result};
    use crate::infrastructure::{FixedLocale, MemoryStorage};
    use crate::ui::notifications::Severity;
    use async_trait::async_trait;

    struct ReadOnlyStorage;

    #[async_trait]
    impl SettingsStorage for ReadOnlyStorage {
        async fn read_blob(&self) -> Result<Option<Blob>> {
            Ok(None)
        }

        async fn write_blob(&self, _blob: &Blob) -> Result<()> {
            Err(Error::Persistence("read-only vault".into()))
        }
    }

    async fn plugin(tag: &str) -> TitleClip {
        TitleClip::on_load(Flags::new(
            Box::new(MemoryStorage::new()),
            Box::new(FixedLocale::new(tag)),
        ))
        .await
    }

    fn heading(view: &SettingsView) -> &str {
        match &view.rows[0] {
            Row::Heading(text) => text,
            other => panic!("expected heading, got {other:?}"),
        }
    }

    fn control(view: &SettingsView, index: usize) -> &Control {
        match &view.rows[index] {
            Row::Setting {
                control: Some(control),
                ..
            } => control,
            other => panic!("expected setting with control, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn view_lists_rows_in_panel_order() {
        let view = view(&plugin("en-US").await);

        assert_eq!(view.rows.len(), 7);
        assert_eq!(heading(&view), "TitleClip - Settings");
        assert!(matches!(view.rows[1], Row::Paragraph(_)));
        assert_eq!(*control(&view, 2), Control::Toggle { value: false });
        assert!(matches!(
            view.rows[5],
            Row::Setting { control: None, .. }
        ));
        assert!(matches!(
            view.rows[6],
            Row::ImageLink { href: SUPPORT_URL, .. }
        ));
    }

    #[tokio::test]
    async fn dropdown_shows_current_language_and_fixed_labels() {
        let view = view(&plugin("es-ES").await);

        match control(&view, 3) {
            Control::Dropdown { options, selected } => {
                assert_eq!(selected, "auto");
                assert_eq!(options.len(), 3);
                assert_eq!(options[2], ("es".to_string(), "Español".to_string()));
            }
            other => panic!("expected dropdown, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reset_button_is_localized_warning() {
        let view = view(&plugin("es-ES").await);

        assert_eq!(
            *control(&view, 4),
            Control::Button {
                label: "Restablecer".to_string(),
                warning: true,
                on_press: Message::ResetRequested,
            }
        );
    }

    #[tokio::test]
    async fn toggle_saves_without_redraw() {
        let mut plugin = plugin("en-US").await;

        let effect = update(&mut plugin, Message::IncludeExtensionToggled(true)).await;

        assert_eq!(effect, Effect::default());
        assert!(plugin.settings().include_extension);
    }

    #[tokio::test]
    async fn language_change_redraws_in_new_language() {
        let mut plugin = plugin("en-US").await;

        let effect = update(&mut plugin, Message::LanguageSelected("es".into())).await;

        assert!(effect.redraw);
        assert_eq!(heading(&view(&plugin)), "TitleClip - Configuración");
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_redraws() {
        let mut plugin = plugin("en-US").await;
        update(&mut plugin, Message::IncludeExtensionToggled(true)).await;
        update(&mut plugin, Message::LanguageSelected("es".into())).await;

        let effect = update(&mut plugin, Message::ResetRequested).await;

        assert!(effect.redraw);
        assert_eq!(plugin.settings(), &Settings::default());
        assert_eq!(heading(&view(&plugin)), "TitleClip - Settings");
    }

    #[tokio::test]
    async fn failed_save_yields_error_notice() {
        let mut plugin = TitleClip::on_load(Flags::new(
            Box::new(ReadOnlyStorage),
            Box::new(FixedLocale::new("en-US")),
        ))
        .await;

        let effect = update(&mut plugin, Message::LanguageSelected("es".into())).await;

        assert!(!effect.redraw);
        let notice = effect.notification.expect("error notice");
        assert_eq!(notice.severity(), Severity::Error);
        assert_eq!(notice.message_key(), keys::ERROR_SETTINGS_SAVE);
        assert_eq!(notice.render(plugin.i18n()), "Could not save settings.");
        assert_eq!(plugin.settings().language, "auto");
    }
}

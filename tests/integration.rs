// SPDX-License-Identifier: MPL-2.0
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tempfile::tempdir;
use title_clip::app::{Flags, TitleClip};
use title_clip::application::port::{Clipboard, MenuAction, MenuBuilder, MenuItem, Notifier};
use title_clip::config::Settings;
use title_clip::error::Result;
use title_clip::i18n::LocaleSource;
use title_clip::infrastructure::{FixedLocale, TomlFileStorage};
use title_clip::ui::notifications::Severity;
use title_clip::ui::settings::{self, Message};

#[derive(Default)]
struct Host {
    items: Vec<MenuItem>,
    clipboard: Mutex<Option<String>>,
    notices: Mutex<Vec<String>>,
}

impl MenuBuilder for Host {
    fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }
}

#[async_trait]
impl Clipboard for Host {
    async fn write_text(&self, text: &str) -> Result<()> {
        *self.clipboard.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

impl Notifier for Host {
    fn notify(&self, message: &str, _severity: Severity, _timeout: Option<Duration>) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

fn flags(storage: TomlFileStorage, tag: &str) -> Flags {
    Flags::new(Box::new(storage), Box::new(FixedLocale::new(tag)))
}

#[tokio::test]
async fn settings_survive_a_reload_from_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut plugin = TitleClip::on_load(flags(TomlFileStorage::new(&path), "en-US")).await;
    settings::update(&mut plugin, Message::IncludeExtensionToggled(true)).await;
    settings::update(&mut plugin, Message::LanguageSelected("es".into())).await;
    plugin.on_unload();

    let reloaded = TitleClip::on_load(flags(TomlFileStorage::new(&path), "en-US")).await;
    assert_eq!(
        reloaded.settings(),
        &Settings {
            include_extension: true,
            language: "es".to_string(),
            ..Settings::default()
        }
    );
    assert_eq!(reloaded.active_locale(), "es");
}

#[tokio::test]
async fn unknown_keys_in_settings_file_are_kept() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "language = \"en\"\npinned = [\"Inbox.md\"]\n")
        .expect("Failed to write settings file");

    let mut plugin = TitleClip::on_load(flags(TomlFileStorage::new(&path), "es-ES")).await;
    assert_eq!(plugin.active_locale(), "en");
    assert!(!plugin.settings().include_extension);

    settings::update(&mut plugin, Message::IncludeExtensionToggled(true)).await;

    let content = std::fs::read_to_string(&path).expect("Failed to read settings file");
    assert!(content.contains("pinned"));
    assert!(content.contains("includeExtension = true"));
}

#[tokio::test]
async fn copy_flow_from_menu_to_notice() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut plugin = TitleClip::on_load(flags(
        TomlFileStorage::new(dir.path().join("settings.toml")),
        "es-MX",
    ))
    .await;
    let mut host = Host::default();
    let file = String::from("Weekly Plan.md");

    plugin.on_file_menu(&mut host, Some(&file));
    let action: MenuAction = host.items[0].action.clone();
    assert_eq!(host.items[0].title, "Copiar título de la nota");

    plugin
        .handle_menu_action(&action, &host, &host)
        .await
        .expect("copy should succeed");
    assert_eq!(host.clipboard.lock().unwrap().as_deref(), Some("Weekly Plan"));

    settings::update(&mut plugin, Message::LanguageSelected("en".into())).await;
    plugin
        .handle_menu_action(&action, &host, &host)
        .await
        .expect("copy should succeed");

    assert_eq!(
        *host.notices.lock().unwrap(),
        vec!["Título copiado: Weekly Plan", "Title copied: Weekly Plan"]
    );
}

#[tokio::test]
async fn unreadable_locale_resource_keeps_menu_working() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = flags(TomlFileStorage::new(dir.path().join("settings.toml")), "en-US")
        .with_locale_source(LocaleSource::File(dir.path().join("missing.json")));

    let plugin = TitleClip::on_load(flags).await;

    assert_eq!(plugin.tr("copy_note_title"), "Copy note title");
    assert_eq!(plugin.i18n().translate("en", "title_copied"), Some("Title copied: {title}"));
    assert_eq!(plugin.tr("settings_title"), "settings_title");
}

#[tokio::test]
async fn external_locale_resource_adds_a_language() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let locales = dir.path().join("locales.json");
    std::fs::write(
        &locales,
        r#"{"en": {}, "fr": {"copy_note_title": "Copier le titre de la note"}}"#,
    )
    .expect("Failed to write locale file");

    let mut plugin = TitleClip::on_load(
        flags(TomlFileStorage::new(dir.path().join("settings.toml")), "en-US")
            .with_locale_source(LocaleSource::File(locales)),
    )
    .await;
    settings::update(&mut plugin, Message::LanguageSelected("fr".into())).await;

    assert_eq!(plugin.active_locale(), "fr");
    assert_eq!(plugin.tr("copy_note_title"), "Copier le titre de la note");
    assert_eq!(plugin.tr("reset_button"), "Reset");
}

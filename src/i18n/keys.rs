// SPDX-License-Identifier: MPL-2.0
//! Translation keys used by the menu, the settings panel and notices.

pub const COPY_NOTE_TITLE: &str = "copy_note_title";
pub const TITLE_COPIED: &str = "title_copied";
pub const SETTINGS_TITLE: &str = "settings_title";
pub const SETTINGS_DESC: &str = "settings_desc";
pub const INCLUDE_EXTENSION: &str = "include_extension";
pub const INCLUDE_EXTENSION_DESC: &str = "include_extension_desc";
pub const LANGUAGE_SELECTION: &str = "language_selection";
pub const LANGUAGE_SELECTION_DESC: &str = "language_selection_desc";
pub const RESET_SETTINGS: &str = "reset_settings";
pub const RESET_SETTINGS_DESC: &str = "reset_settings_desc";
pub const RESET_BUTTON: &str = "reset_button";
pub const SUPPORT_MY_WORK: &str = "support_my_work";
pub const SUPPORT_MY_WORK_DESC: &str = "support_my_work_desc";
pub const ERROR_SETTINGS_SAVE: &str = "error_settings_save";
pub const ERROR_CLIPBOARD: &str = "error_clipboard";

/// Keys the menu action cannot work without. The built-in table covers them.
pub const REQUIRED: &[&str] = &[COPY_NOTE_TITLE, TITLE_COPIED];

/// Every key the plugin looks up.
pub const ALL: &[&str] = &[
    COPY_NOTE_TITLE,
    TITLE_COPIED,
    SETTINGS_TITLE,
    SETTINGS_DESC,
    INCLUDE_EXTENSION,
    INCLUDE_EXTENSION_DESC,
    LANGUAGE_SELECTION,
    LANGUAGE_SELECTION_DESC,
    RESET_SETTINGS,
    RESET_SETTINGS_DESC,
    RESET_BUTTON,
    SUPPORT_MY_WORK,
    SUPPORT_MY_WORK_DESC,
    ERROR_SETTINGS_SAVE,
    ERROR_CLIPBOARD,
];

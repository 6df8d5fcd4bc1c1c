// SPDX-License-Identifier: MPL-2.0
//! File context menu port definition.
//!
//! The host owns the menu widget. The plugin describes items as plain data
//! and receives the [`MenuAction`] back when the user clicks one.

/// Extension the host gives note files.
pub const NOTE_EXTENSION: &str = ".md";

/// A file the host is showing a context menu for.
pub trait FileRef {
    /// File name including its extension (e.g. `"Notes.md"`).
    fn name(&self) -> &str;

    /// File name without a trailing `.md`.
    ///
    /// Only the note extension is stripped, case-sensitively; any other
    /// name (`"photo.png"`, `"2024.01"`) is returned unchanged.
    fn basename(&self) -> &str {
        let name = self.name();
        name.strip_suffix(NOTE_EXTENSION).unwrap_or(name)
    }
}

impl FileRef for str {
    fn name(&self) -> &str {
        self
    }
}

impl FileRef for String {
    fn name(&self) -> &str {
        self
    }
}

/// Action carried by a menu item and handed back to the plugin on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Copy the title of the named file to the clipboard.
    CopyNoteTitle { file_name: String },
}

/// One entry contributed to a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub icon: &'static str,
    pub action: MenuAction,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, action: MenuAction) -> Self {
        Self {
            title: title.into(),
            icon: "",
            action,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }
}

/// Port for adding items to the host's context menu.
pub trait MenuBuilder {
    fn add_item(&mut self, item: MenuItem);
}

// SPDX-License-Identifier: MPL-2.0
//! "Copy note title" file menu contribution.

use super::TitleClip;
use crate::application::port::{Clipboard, FileRef, MenuAction, MenuBuilder, MenuItem, Notifier};
use crate::error::Result;
use crate::i18n::keys;
use crate::ui::notifications::Notification;

/// Host icon identifier for the menu item.
pub const COPY_ICON: &str = "copy";

/// Title copied for `file`: its full name, or the name without a trailing
/// `.md`.
pub fn note_title<F: FileRef + ?Sized>(file: &F, include_extension: bool) -> String {
    if include_extension {
        file.name().to_string()
    } else {
        file.basename().to_string()
    }
}

impl TitleClip {
    /// Adds the copy action to a file context menu. Does nothing without a file.
    pub fn on_file_menu(&self, menu: &mut dyn MenuBuilder, file: Option<&dyn FileRef>) {
        let Some(file) = file else {
            return;
        };

        let action = MenuAction::CopyNoteTitle {
            file_name: file.name().to_string(),
        };
        menu.add_item(MenuItem::new(self.tr(keys::COPY_NOTE_TITLE), action).with_icon(COPY_ICON));
    }

    /// Runs a clicked menu action and returns the copied title.
    ///
    /// The title is computed from the settings in effect at click time. The
    /// notice is only shown once the clipboard write succeeded.
    ///
    /// # Errors
    ///
    /// Returns the clipboard error unchanged.
    pub async fn handle_menu_action(
        &self,
        action: &MenuAction,
        clipboard: &dyn Clipboard,
        notifier: &dyn Notifier,
    ) -> Result<String> {
        match action {
            MenuAction::CopyNoteTitle { file_name } => {
                let title = note_title(file_name.as_str(), self.settings.include_extension);
                if let Err(error) = clipboard.write_text(&title).await {
                    tracing::warn!(%error, "failed to copy note title");
                    return Err(error);
                }

                Notification::info(keys::TITLE_COPIED)
                    .with_title(title.as_str())
                    .show(&self.i18n, notifier);
                Ok(title)
            }
        }
    }
}

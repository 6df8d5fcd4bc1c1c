// SPDX-License-Identifier: MPL-2.0
//! Settings persistence for the plugin instance.
//!
//! Callers read-modify-write: they hand a complete [`Settings`] value to
//! [`TitleClip::save_settings`]. Ordering is fixed: the blob is persisted,
//! then the active locale is recomputed, then listeners are signaled. On a
//! failed write nothing in memory changes.

use super::TitleClip;
use crate::config::Settings;
use crate::error::Result;

impl TitleClip {
    /// Persists `settings` and makes them current.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails; the previous settings
    /// and active locale stay in effect.
    pub async fn save_settings(&mut self, settings: Settings) -> Result<()> {
        if let Err(error) = self.store.save(&settings).await {
            tracing::error!(%error, "failed to save settings");
            return Err(error);
        }

        self.settings = settings;
        self.refresh_locale();
        Ok(())
    }

    /// Applies `change` to a copy of the current settings and saves it.
    pub async fn update_settings<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.clone();
        change(&mut settings);
        self.save_settings(settings).await
    }

    /// Replaces every setting with its default and saves.
    pub async fn reset_settings(&mut self) -> Result<()> {
        self.save_settings(Settings::default()).await
    }
}

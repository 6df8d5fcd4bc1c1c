// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::application::port::Notifier;
use crate::i18n::{fill_title, I18n};
use std::time::Duration;

/// Severity level determines display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message (3s duration).
    Info,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Info => Some(Duration::from_secs(3)),
            Severity::Error => None,
        }
    }
}

/// A notice to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    /// The i18n key for the notice text.
    message_key: String,
    /// Value substituted for the `{title}` placeholder.
    title: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            title: None,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Sets the value for the `{title}` placeholder.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Auto-dismiss duration; `None` means manual dismiss.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.severity.auto_dismiss_duration()
    }

    /// Resolves the notice text in the active locale.
    #[must_use]
    pub fn render(&self, i18n: &I18n) -> String {
        let text = i18n.tr(&self.message_key);
        match &self.title {
            Some(title) => fill_title(&text, title),
            None => text,
        }
    }

    /// Renders the notice and hands it to the host.
    pub fn show(&self, i18n: &I18n, notifier: &dyn Notifier) {
        notifier.notify(&self.render(i18n), self.severity, self.dismiss_after());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Host capability ports: locale, clipboard and notices.

use crate::error::Result;
use crate::ui::notifications::Severity;
use async_trait::async_trait;
use std::time::Duration;

/// Reports the host's UI locale as a BCP-47-like tag (e.g. `"en-US"`).
pub trait LocaleProvider: Send + Sync {
    fn locale_tag(&self) -> String;
}

/// Port for writing plain text to the system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`](crate::error::Error::Clipboard) when the
    /// host refuses the write (permissions, unsupported environment).
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Fire-and-forget transient notice (toast).
pub trait Notifier: Send + Sync {
    /// Shows `message`. `timeout` of `None` means the user dismisses it.
    fn notify(&self, message: &str, severity: Severity, timeout: Option<Duration>);
}

// SPDX-License-Identifier: MPL-2.0
//! Transient notices shown through the host's toast API.
//!
//! A [`Notification`] carries an i18n key rather than text; it is resolved
//! against the active locale when shown, so a notice raised just before a
//! language change still reads correctly.
//!
//! # Usage
//!
//! ```
//! use title_clip::i18n::{keys, I18n};
//! use title_clip::ui::notifications::{Notification, Severity};
//!
//! let i18n = I18n::default();
//! let notice = Notification::info(keys::TITLE_COPIED).with_title("Notes");
//!
//! assert_eq!(notice.severity(), Severity::Info);
//! assert_eq!(notice.render(&i18n), "Title copied: Notes");
//! ```

mod notification;

pub use notification::{Notification, Severity};

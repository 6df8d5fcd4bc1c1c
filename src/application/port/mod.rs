// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The plugin never sees the host's full object model. Each port is the
//! smallest capability the core needs.
//!
//! # Available Ports
//!
//! - [`storage`]: Settings blob persistence
//! - [`host`]: Locale reporting, clipboard and transient notices
//! - [`menu`]: File context menu contribution
//!
//! # Design Notes
//!
//! - Async ports use `async_trait` so they stay object safe
//! - All ports are `Send + Sync` so adapters can be boxed freely
//! - Methods return the crate [`Result`](crate::error::Result)
//!
//! # Example
//!
//! ```
//! use title_clip::application::port::FileRef;
//!
//! struct Note(String);
//!
//! impl FileRef for Note {
//!     fn name(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! assert_eq!(Note("Plan.md".into()).basename(), "Plan");
//! ```

pub mod host;
pub mod menu;
pub mod storage;

pub use host::{Clipboard, LocaleProvider, Notifier};
pub use menu::{FileRef, MenuAction, MenuBuilder, MenuItem, NOTE_EXTENSION};
pub use storage::SettingsStorage;

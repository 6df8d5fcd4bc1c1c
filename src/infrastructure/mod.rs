// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, for hosts that lack a native equivalent.
//!
//! # Available Adapters
//!
//! - [`storage`]: TOML file and in-memory settings storage
//!   (implement [`SettingsStorage`])
//! - [`locale`]: OS and fixed locale reporting (implement [`LocaleProvider`])
//!
//! [`SettingsStorage`]: crate::application::port::SettingsStorage
//! [`LocaleProvider`]: crate::application::port::LocaleProvider

pub mod locale;
pub mod storage;

pub use locale::{FixedLocale, SystemLocale};
pub use storage::{MemoryStorage, TomlFileStorage};

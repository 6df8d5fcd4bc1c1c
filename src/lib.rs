// SPDX-License-Identifier: MPL-2.0
//! `title_clip` adds a "copy note title" action to a host application's file
//! context menu.
//!
//! The plugin keeps two persisted settings (include the file extension, UI
//! language) and resolves every user-facing string through a small English
//! and Spanish locale table. Host objects (storage, clipboard, menus, toasts)
//! are reached only through the traits in [`application::port`].

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

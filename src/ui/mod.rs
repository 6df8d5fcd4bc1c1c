// SPDX-License-Identifier: MPL-2.0
//! User-facing surfaces, following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`settings`] - Settings panel rows and their update handler
//! - [`notifications`] - Transient notices resolved against the active locale

pub mod notifications;
pub mod settings;

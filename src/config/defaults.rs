// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the plugin settings.
//!
//! This module is the single source of truth for default values and
//! persisted key names. Constants are organized by category.

// ==========================================================================
// Persisted Keys
// ==========================================================================

/// Blob key for the "include extension" toggle.
pub const KEY_INCLUDE_EXTENSION: &str = "includeExtension";

/// Blob key for the language selection.
pub const KEY_LANGUAGE: &str = "language";

// ==========================================================================
// Setting Defaults
// ==========================================================================

/// Copied titles drop the file extension unless the user opts in.
pub const DEFAULT_INCLUDE_EXTENSION: bool = false;

/// Language value meaning "follow the host locale".
pub const AUTO_LANGUAGE: &str = "auto";

/// Default language selection.
pub const DEFAULT_LANGUAGE: &str = AUTO_LANGUAGE;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Universal fallback locale. Must contain every translation key.
pub const FALLBACK_LOCALE: &str = "en";

/// Locale tag assumed when the host cannot report one.
pub const DEFAULT_HOST_LOCALE_TAG: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!KEY_INCLUDE_EXTENSION.is_empty());
    assert!(!KEY_LANGUAGE.is_empty());
    assert!(!FALLBACK_LOCALE.is_empty());
    assert!(!DEFAULT_LANGUAGE.is_empty());
};

// SPDX-License-Identifier: MPL-2.0
//! Locale reporting adapters.

use crate::application::port::LocaleProvider;
use crate::config::DEFAULT_HOST_LOCALE_TAG;

/// Reports the operating system locale via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleProvider for SystemLocale {
    fn locale_tag(&self) -> String {
        sys_locale::get_locale().unwrap_or_else(|| DEFAULT_HOST_LOCALE_TAG.to_string())
    }
}

/// Reports a locale tag supplied by the host at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn locale_tag(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_locale_reports_its_tag() {
        assert_eq!(FixedLocale::new("es-MX").locale_tag(), "es-MX");
    }

    #[test]
    fn system_locale_is_never_empty() {
        // System dependent; only the fallback contract is checked
        assert!(!SystemLocale.locale_tag().is_empty());
    }
}

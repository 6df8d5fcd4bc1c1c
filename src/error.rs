// SPDX-License-Identifier: MPL-2.0
use crate::i18n::keys;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Persistence Error: {0}")]
    Persistence(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Locale Resource Error: {0}")]
    LocaleResource(String),

    #[error("Missing translation for key `{0}`")]
    MissingTranslation(String),
}

impl Error {
    /// Returns the i18n message key for errors that can reach the user.
    ///
    /// Locale and translation errors are recovered internally and never
    /// shown, so they have no key.
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Error::Io(_) | Error::Config(_) | Error::Persistence(_) => {
                Some(keys::ERROR_SETTINGS_SAVE)
            }
            Error::Clipboard(_) => Some(keys::ERROR_CLIPBOARD),
            Error::LocaleResource(_) | Error::MissingTranslation(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::LocaleResource(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MPL-2.0
//! Settings storage adapters.
//!
//! [`TomlFileStorage`] keeps the blob in a `settings.toml` file under the
//! plugin config directory. [`MemoryStorage`] keeps it in process, for hosts
//! that bridge their own store and for tests.

use crate::app::paths;
use crate::application::port::SettingsStorage;
use crate::config::Blob;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const CONFIG_FILE: &str = "settings.toml";

/// Settings blob persisted as a TOML document.
#[derive(Debug, Clone)]
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    /// Uses an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `settings.toml` in the resolved config directory.
    ///
    /// Returns `None` if no config directory can be determined.
    pub fn with_config_dir(override_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_config_dir_with_override(override_dir).map(|mut path| {
            path.push(CONFIG_FILE);
            Self { path }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStorage for TomlFileStorage {
    async fn read_blob(&self) -> Result<Option<Blob>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let blob: Blob = toml::from_str(&content)?;
        Ok(Some(blob))
    }

    async fn write_blob(&self, blob: &Blob) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(blob)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

/// Settings blob held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<Blob>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a previously persisted blob.
    pub fn with_blob(blob: Blob) -> Self {
        Self {
            blob: Mutex::new(Some(blob)),
        }
    }

    /// Returns a copy of the currently stored blob.
    pub fn snapshot(&self) -> Option<Blob> {
        self.blob.lock().ok().and_then(|blob| blob.clone())
    }
}

#[async_trait]
impl SettingsStorage for MemoryStorage {
    async fn read_blob(&self) -> Result<Option<Blob>> {
        let blob = self
            .blob
            .lock()
            .map_err(|_| Error::Persistence("settings storage lock poisoned".into()))?;
        Ok(blob.clone())
    }

    async fn write_blob(&self, blob: &Blob) -> Result<()> {
        let mut stored = self
            .blob
            .lock()
            .map_err(|_| Error::Persistence("settings storage lock poisoned".into()))?;
        *stored = Some(blob.clone());
        Ok(())
    }
}

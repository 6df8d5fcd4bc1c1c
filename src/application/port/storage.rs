// SPDX-License-Identifier: MPL-2.0
//! Settings persistence port definition.

use crate::config::Blob;
use crate::error::Result;
use async_trait::async_trait;

/// Port for the host's key-value settings store.
///
/// The store holds a single blob per plugin. Reads may find nothing (first
/// run); writes replace the whole blob.
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Reads the persisted blob, or `None` if nothing was saved yet.
    async fn read_blob(&self) -> Result<Option<Blob>>;

    /// Replaces the persisted blob.
    async fn write_blob(&self, blob: &Blob) -> Result<()>;
}

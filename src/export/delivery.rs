//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Portal.
//! The Zi Portal project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Delivery Module
//!
//! Turning CSV text into downloadable bytes, and handing those bytes to the
//! user.
//!
//! Producing bytes is a pure function; delivery is a thin async adapter behind
//! the [`ZiDelivery`] trait. [`ZiFileDelivery`] writes into a directory with a
//! temp-file-then-rename step, [`ZiMemoryDelivery`] keeps files in memory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::ZiPortalConfig;
use crate::errors::{Result, ZiError};

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding of `₹`.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Encodes CSV text as UTF-8, optionally prefixed with a byte-order mark.
pub fn produce_bytes(csv: &str, include_bom: bool) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(csv.len() + UTF8_BOM.len());
    if include_bom {
        bytes.extend_from_slice(&UTF8_BOM);
    }
    bytes.extend_from_slice(csv.as_bytes());
    bytes
}

/// Hands a finished export to the user.
#[async_trait]
pub trait ZiDelivery: Send + Sync {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes exports into a directory on disk.
#[derive(Clone, Debug)]
pub struct ZiFileDelivery {
    output_dir: PathBuf,
    atomic_write: bool,
}

impl ZiFileDelivery {
    #[allow(non_snake_case)]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            atomic_write: true,
        }
    }

    pub fn from_config(config: &ZiPortalConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            atomic_write: config.atomic_write,
        }
    }

    pub fn with_atomic_write(mut self, atomic_write: bool) -> Self {
        self.atomic_write = atomic_write;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn temp_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(format!(".{file_name}.tmp"))
    }
}

#[async_trait]
impl ZiDelivery for ZiFileDelivery {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(ZiError::delivery(file_name, "file name must be a plain file name"));
        }
        let fail = |err: std::io::Error| ZiError::delivery(file_name, err.to_string());

        tokio::fs::create_dir_all(&self.output_dir).await.map_err(fail)?;
        let target = self.output_dir.join(file_name);

        if self.atomic_write {
            let temp = self.temp_path(file_name);
            let written = match tokio::fs::write(&temp, bytes).await {
                Ok(()) => tokio::fs::rename(&temp, &target).await,
                Err(err) => Err(err),
            };
            if let Err(err) = written {
                // a partial temp file is never left behind
                let _ = tokio::fs::remove_file(&temp).await;
                return Err(fail(err));
            }
        } else {
            tokio::fs::write(&target, bytes).await.map_err(fail)?;
        }

        log::debug!("wrote {} bytes to {}", bytes.len(), target.display());
        Ok(())
    }
}

/// A file captured by [`ZiMemoryDelivery`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiDeliveredFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ZiDeliveredFile {
    /// The file's text with any byte-order mark removed.
    pub fn text(&self) -> String {
        let body = self.bytes.strip_prefix(&UTF8_BOM).unwrap_or(&self.bytes);
        String::from_utf8_lossy(body).into_owned()
    }
}

/// Keeps delivered files in memory.
#[derive(Debug, Default)]
pub struct ZiMemoryDelivery {
    files: Mutex<Vec<ZiDeliveredFile>>,
}

impl ZiMemoryDelivery {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every delivery so far, oldest first.
    pub fn files(&self) -> Vec<ZiDeliveredFile> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ZiDelivery for ZiMemoryDelivery {
    async fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| ZiError::delivery(file_name, "delivery buffer poisoned"))?;
        files.push(ZiDeliveredFile {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

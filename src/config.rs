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

//! # Portal Configuration
//!
//! Settings shared by the exporter and the file delivery adapter. Values can
//! be chained from [`ZiPortalConfig::default`] or loaded from a JSON or YAML
//! file; missing keys keep their defaults.
//!
//! ```yaml
//! output_dir: exports
//! include_bom: true
//! export_date: 2024-10-01
//! filename_stems:
//!   students: student_roster
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dataset::{extension_of, ZiLogicalType};
use crate::errors::{Result, ZiError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiPortalConfig {
    /// Directory used by file delivery.
    pub output_dir: PathBuf,
    /// Prefix exported bytes with a UTF-8 byte-order mark.
    pub include_bom: bool,
    /// Write to a temp file and rename into place.
    pub atomic_write: bool,
    /// Date stamped into file names; today when unset.
    pub export_date: Option<NaiveDate>,
    /// Per-type file name stems, keyed by logical type name.
    pub filename_stems: HashMap<String, String>,
}

impl Default for ZiPortalConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
            include_bom: true,
            atomic_write: true,
            export_date: None,
            filename_stems: HashMap::new(),
        }
    }
}

impl ZiPortalConfig {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(non_snake_case)]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[allow(non_snake_case)]
    pub fn include_bom(mut self, enabled: bool) -> Self {
        self.include_bom = enabled;
        self
    }

    #[allow(non_snake_case)]
    pub fn atomic_write(mut self, enabled: bool) -> Self {
        self.atomic_write = enabled;
        self
    }

    #[allow(non_snake_case)]
    pub fn export_date(mut self, date: NaiveDate) -> Self {
        self.export_date = Some(date);
        self
    }

    #[allow(non_snake_case)]
    pub fn filename_stem(mut self, logical_type: ZiLogicalType, stem: &str) -> Self {
        self.filename_stems
            .insert(logical_type.name().to_string(), stem.to_string());
        self
    }

    /// Stem for a type: the configured one, or the type name.
    pub fn stem_for(&self, logical_type: ZiLogicalType) -> String {
        self.filename_stems
            .get(logical_type.name())
            .filter(|stem| !stem.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| logical_type.name().to_string())
    }

    /// The configured export date, or today's local date.
    pub fn effective_date(&self) -> NaiveDate {
        self.export_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Loads configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| ZiError::config(format!("{}: {}", path.display(), err)))?;
        let config: ZiPortalConfig = match extension_of(path).as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .map_err(|err| ZiError::config(format!("{}: {}", path.display(), err)))?,
            Some("json") => serde_json::from_str(&text)
                .map_err(|err| ZiError::config(format!("{}: {}", path.display(), err)))?,
            _ => {
                return Err(ZiError::config(format!(
                    "unsupported config file: {}",
                    path.display()
                )))
            }
        };
        Ok(config)
    }
}

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

//! # Dataset Module
//!
//! Logical record categories and the immutable data provider the export
//! pipeline reads from.
//!
//! Datasets are built once (from the bundled sample data, a builder, or a
//! JSON/YAML document keyed by logical type name) and never mutated
//! afterwards. The provider is injected into the exporter instead of living in
//! a process-wide static, so every component can be exercised with fixtures.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::record::{ZiRecord, ZiRecordBatch};

/// Record categories the portal can export.
///
/// `Profile` is the student dashboard's view of the students dataset: it
/// reads the same records and columns as `Students`, but carries its own
/// access rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiLogicalType {
    Students,
    Profile,
    Companies,
    Applications,
    Training,
    Faculty,
    Operations,
    Budget,
}

impl ZiLogicalType {
    /// The seven stored datasets. `Profile` is a view and is not listed.
    pub const ALL: [ZiLogicalType; 7] = [
        ZiLogicalType::Students,
        ZiLogicalType::Companies,
        ZiLogicalType::Applications,
        ZiLogicalType::Training,
        ZiLogicalType::Faculty,
        ZiLogicalType::Operations,
        ZiLogicalType::Budget,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZiLogicalType::Students => "students",
            ZiLogicalType::Profile => "profile",
            ZiLogicalType::Companies => "companies",
            ZiLogicalType::Applications => "applications",
            ZiLogicalType::Training => "training",
            ZiLogicalType::Faculty => "faculty",
            ZiLogicalType::Operations => "operations",
            ZiLogicalType::Budget => "budget",
        }
    }

    /// The dataset this type reads from.
    pub fn source(&self) -> ZiLogicalType {
        match self {
            ZiLogicalType::Profile => ZiLogicalType::Students,
            other => *other,
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "students" => Some(ZiLogicalType::Students),
            "profile" => Some(ZiLogicalType::Profile),
            "companies" => Some(ZiLogicalType::Companies),
            "applications" => Some(ZiLogicalType::Applications),
            "training" => Some(ZiLogicalType::Training),
            "faculty" => Some(ZiLogicalType::Faculty),
            "operations" => Some(ZiLogicalType::Operations),
            "budget" => Some(ZiLogicalType::Budget),
            _ => None,
        }
    }
}

impl fmt::Display for ZiLogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only source of datasets, one per logical type.
pub trait ZiDataProvider: Send + Sync {
    /// Returns every record of the given type, in dataset order.
    fn dataset(&self, logical_type: ZiLogicalType) -> &[ZiRecord];
}

/// In-memory [`ZiDataProvider`] holding one immutable batch per logical type.
#[derive(Clone, Debug, Default)]
pub struct ZiDatasetStore {
    datasets: HashMap<ZiLogicalType, ZiRecordBatch>,
}

impl ZiDatasetStore {
    pub fn builder() -> ZiDatasetStoreBuilder {
        ZiDatasetStoreBuilder::default()
    }

    /// Store populated with the bundled sample data.
    pub fn sample() -> Self {
        crate::sample::sample_store()
    }

    /// Builds a store from a JSON object mapping type names to record arrays.
    ///
    /// ```json
    /// {"students": [{"id": "STU001", "name": "Aarav"}], "budget": []}
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ZiError::validation("dataset document must be an object"))?;

        let mut builder = Self::builder();
        for (name, records) in obj {
            let logical_type = ZiLogicalType::from_name(name)
                .ok_or_else(|| ZiError::UnknownLogicalType(name.clone()))?;
            let items = records.as_array().ok_or_else(|| {
                ZiError::validation(format!("dataset '{name}' must be an array"))
            })?;
            let batch = items
                .iter()
                .map(|item| {
                    if item.is_object() {
                        Ok(ZiRecord::from_json(item.clone()))
                    } else {
                        Err(ZiError::validation(format!(
                            "dataset '{name}' entries must be objects"
                        )))
                    }
                })
                .collect::<Result<ZiRecordBatch>>()?;
            builder = builder.with_dataset(logical_type, batch);
        }

        Ok(builder.build())
    }

    /// Loads a store from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let value: Value = match extension_of(path).as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => {
                return Err(ZiError::validation(format!(
                    "unsupported dataset file: {}",
                    path.display()
                )))
            }
        };
        let store = Self::from_json(&value)?;
        log::debug!(
            "loaded {} datasets from {}",
            store.datasets.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn len(&self, logical_type: ZiLogicalType) -> usize {
        self.dataset(logical_type).len()
    }
}

impl ZiDataProvider for ZiDatasetStore {
    fn dataset(&self, logical_type: ZiLogicalType) -> &[ZiRecord] {
        self.datasets
            .get(&logical_type.source())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Builder for [`ZiDatasetStore`].
#[derive(Debug, Default)]
pub struct ZiDatasetStoreBuilder {
    datasets: HashMap<ZiLogicalType, ZiRecordBatch>,
}

impl ZiDatasetStoreBuilder {
    /// Sets the dataset for a type, replacing any earlier one.
    pub fn with_dataset(mut self, logical_type: ZiLogicalType, records: ZiRecordBatch) -> Self {
        self.datasets.insert(logical_type.source(), records);
        self
    }

    pub fn build(self) -> ZiDatasetStore {
        ZiDatasetStore {
            datasets: self.datasets,
        }
    }
}

pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

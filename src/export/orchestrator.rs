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

//! # Export Orchestrator
//!
//! Composes the pipeline for one export request:
//!
//! 1. resolve the logical type
//! 2. role filter (empty → no data for role)
//! 3. predicate filter (empty → no data after filter)
//! 4. header map lookup
//! 5. table serialization
//! 6. file name `{stem}_{YYYY-MM-DD}.csv`
//! 7. byte production and delivery
//!
//! [`ZiExporter::try_export`] returns the typed outcome. [`ZiExporter::export`]
//! catches every error at the boundary, reports it through the notifier and
//! reduces the outcome to a boolean.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::access::{ZiPrincipal, ZiRoleFilter};
use crate::config::ZiPortalConfig;
use crate::dataset::{ZiDataProvider, ZiLogicalType};
use crate::errors::{Result, ZiError};
use crate::export::delivery::{produce_bytes, ZiDelivery};
use crate::export::format::{serialize_table, ZiCsvOutput, NO_DATA_MESSAGE};
use crate::export::headers::ZiHeaderRegistry;
use crate::notify::{ZiNotifier, ZiSeverity};
use crate::operator::execute_operator;
use crate::operators::filter::{ZiConstraintSet, ZiPredicateFilter};

/// Message reported when constraints remove every record.
pub const NO_MATCH_MESSAGE: &str = "No data matches the selected filters";

/// One user-initiated export.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiExportRequest {
    /// Logical type name as supplied by the caller.
    pub logical_type: String,
    pub principal: ZiPrincipal,
    pub constraints: Option<ZiConstraintSet>,
    pub filename_stem: String,
}

impl ZiExportRequest {
    /// Request whose file name stem is the type name.
    #[allow(non_snake_case)]
    pub fn new(logical_type: impl Into<String>, principal: ZiPrincipal) -> Self {
        let logical_type = logical_type.into();
        let filename_stem = logical_type.trim().to_ascii_lowercase();
        Self {
            logical_type,
            principal,
            constraints: None,
            filename_stem,
        }
    }

    pub fn with_constraints(mut self, constraints: ZiConstraintSet) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_filename_stem(mut self, stem: impl Into<String>) -> Self {
        self.filename_stem = stem.into();
        self
    }
}

/// Bytes ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiPreparedExport {
    pub logical_type: ZiLogicalType,
    pub file_name: String,
    pub records: usize,
    pub bytes: Vec<u8>,
}

/// Summary of a delivered export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiExportReceipt {
    pub logical_type: ZiLogicalType,
    pub file_name: String,
    pub records_exported: usize,
    pub bytes_written: usize,
    /// BLAKE3 hex digest of the delivered bytes.
    pub content_hash: String,
}

/// Builds `{stem}_{YYYY-MM-DD}.csv`.
pub fn export_file_name(stem: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", stem, date.format("%Y-%m-%d"))
}

/// Runs export requests against an injected data provider.
pub struct ZiExporter {
    provider: Arc<dyn ZiDataProvider>,
    role_filter: ZiRoleFilter,
    delivery: Arc<dyn ZiDelivery>,
    notifier: Arc<dyn ZiNotifier>,
    config: ZiPortalConfig,
}

impl std::fmt::Debug for ZiExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiExporter")
            .field("role_filter", &self.role_filter)
            .field("config", &self.config)
            .finish()
    }
}

impl ZiExporter {
    /// Exporter with the standard role table and default configuration.
    #[allow(non_snake_case)]
    pub fn new(
        provider: Arc<dyn ZiDataProvider>,
        delivery: Arc<dyn ZiDelivery>,
        notifier: Arc<dyn ZiNotifier>,
    ) -> Self {
        Self {
            provider,
            role_filter: ZiRoleFilter::standard(),
            delivery,
            notifier,
            config: ZiPortalConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ZiPortalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_role_filter(mut self, role_filter: ZiRoleFilter) -> Self {
        self.role_filter = role_filter;
        self
    }

    pub fn config(&self) -> &ZiPortalConfig {
        &self.config
    }

    /// Runs steps 1–6 and produces the bytes to deliver, without delivering.
    pub fn prepare(&self, request: &ZiExportRequest) -> Result<ZiPreparedExport> {
        let logical_type = ZiLogicalType::from_name(&request.logical_type)
            .ok_or_else(|| ZiError::UnknownLogicalType(request.logical_type.clone()))?;

        let scoped = self
            .role_filter
            .apply(&request.principal, logical_type, self.provider.as_ref());
        if scoped.is_empty() {
            return Err(ZiError::no_data_for_role(
                request.principal.role_name(),
                logical_type.name(),
            ));
        }

        let records = match &request.constraints {
            Some(constraints) if !constraints.is_empty() => {
                let filter = ZiPredicateFilter::new(constraints.clone());
                let filtered = execute_operator(&filter, scoped)?;
                if filtered.is_empty() {
                    return Err(ZiError::no_data_after_filter(logical_type.name()));
                }
                filtered
            }
            _ => scoped,
        };

        let columns = ZiHeaderRegistry::lookup(logical_type.name());
        if columns.is_empty() {
            return Err(ZiError::UnknownLogicalType(request.logical_type.clone()));
        }

        // records is non-empty here
        let ZiCsvOutput::Document(csv) = serialize_table(columns, &records)? else {
            return Err(ZiError::no_data_after_filter(logical_type.name()));
        };

        let stem = match request.filename_stem.trim() {
            "" => logical_type.name(),
            stem => stem,
        };
        let file_name = export_file_name(stem, self.config.effective_date());

        Ok(ZiPreparedExport {
            logical_type,
            file_name,
            records: records.len(),
            bytes: produce_bytes(&csv, self.config.include_bom),
        })
    }

    /// Runs the whole pipeline and returns the typed outcome.
    pub async fn try_export(&self, request: &ZiExportRequest) -> Result<ZiExportReceipt> {
        log::debug!(
            "export requested: type={} role={}",
            request.logical_type,
            request.principal.role_name()
        );

        let prepared = self.prepare(request)?;
        self.delivery
            .deliver(&prepared.file_name, &prepared.bytes)
            .await?;

        Ok(ZiExportReceipt {
            logical_type: prepared.logical_type,
            content_hash: blake3::hash(&prepared.bytes).to_hex().to_string(),
            bytes_written: prepared.bytes.len(),
            records_exported: prepared.records,
            file_name: prepared.file_name,
        })
    }

    /// Runs the pipeline, notifies the outcome and reports success.
    pub async fn export(&self, request: &ZiExportRequest) -> bool {
        match self.try_export(request).await {
            Ok(receipt) => {
                log::info!(
                    "exported {} {} records to {} ({} bytes)",
                    receipt.records_exported,
                    receipt.logical_type,
                    receipt.file_name,
                    receipt.bytes_written
                );
                self.notifier.notify(
                    &format!(
                        "Exported {} records to {}",
                        receipt.records_exported, receipt.file_name
                    ),
                    ZiSeverity::Success,
                );
                true
            }
            Err(err) => {
                let (message, severity) = match &err {
                    ZiError::NoDataForRole { .. } => (NO_DATA_MESSAGE.to_string(), ZiSeverity::Warning),
                    ZiError::NoDataAfterFilter { .. } => (NO_MATCH_MESSAGE.to_string(), ZiSeverity::Warning),
                    other => (format!("Export failed: {other}"), ZiSeverity::Error),
                };
                if err.is_empty_result() {
                    log::warn!("export of '{}' skipped: {}", request.logical_type, err);
                } else {
                    log::error!("export of '{}' failed: {}", request.logical_type, err);
                }
                self.notifier.notify(&message, severity);
                false
            }
        }
    }

    /// Exports one logical type with the configured file name stem.
    pub async fn export_type(
        &self,
        logical_type: ZiLogicalType,
        principal: &ZiPrincipal,
        constraints: Option<ZiConstraintSet>,
    ) -> bool {
        let mut request = ZiExportRequest::new(logical_type.name(), principal.clone())
            .with_filename_stem(self.config.stem_for(logical_type));
        request.constraints = constraints;
        self.export(&request).await
    }

    pub async fn export_students(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Students, principal, constraints).await
    }

    /// The student dashboard's export of the caller's own record.
    pub async fn export_profile(&self, principal: &ZiPrincipal) -> bool {
        self.export_type(ZiLogicalType::Profile, principal, None).await
    }

    pub async fn export_companies(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Companies, principal, constraints).await
    }

    pub async fn export_applications(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Applications, principal, constraints).await
    }

    pub async fn export_training(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Training, principal, constraints).await
    }

    pub async fn export_faculty(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Faculty, principal, constraints).await
    }

    pub async fn export_operations(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Operations, principal, constraints).await
    }

    pub async fn export_budget(&self, principal: &ZiPrincipal, constraints: Option<ZiConstraintSet>) -> bool {
        self.export_type(ZiLogicalType::Budget, principal, constraints).await
    }

    /// Exports every logical type concurrently; each export is independent.
    pub async fn export_all(&self, principal: &ZiPrincipal) -> Vec<(ZiLogicalType, bool)> {
        let outcomes = join_all(
            ZiLogicalType::ALL
                .iter()
                .map(|logical_type| self.export_type(*logical_type, principal, None)),
        )
        .await;

        ZiLogicalType::ALL.into_iter().zip(outcomes).collect()
    }
}

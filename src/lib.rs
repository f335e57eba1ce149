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

//! # Zi Portal Core Library
//!
//! Export core of the university placement portal. Every dashboard (student,
//! faculty, outreach, operations, admin) exports its records through the same
//! pipeline: role scoping, optional predicate filtering, header mapping, CSV
//! serialization and delivery.
//!
//! ## Module Overview
//!
//! - **record**: tagged field values, records and dotted field paths
//! - **dataset**: logical types and the injected, immutable data provider
//! - **access**: roles, principals and the table-driven role filter
//! - **operator** / **operators**: batch operators, including the predicate filter
//! - **export**: CSV formatting, header maps, templates, delivery and the orchestrator
//! - **ingest**: bulk-upload reading
//! - **notify**: toast-style outcome notifications
//! - **config**: portal configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use ziportal::{ZiConstraint, ZiConstraintSet, ZiDatasetStore, ZiExporter,
//!     ZiMemoryDelivery, ZiNotificationLog, ZiPrincipal, ZiRole};
//!
//! #[tokio::main]
//! async fn main() {
//!     let delivery = Arc::new(ZiMemoryDelivery::new());
//!     let exporter = ZiExporter::new(
//!         Arc::new(ZiDatasetStore::sample()),
//!         delivery.clone(),
//!         Arc::new(ZiNotificationLog::new()),
//!     );
//!
//!     let constraints = ZiConstraintSet::new().with("cgpa", ZiConstraint::between(8.0, 9.0));
//!     let ok = exporter
//!         .export_students(&ZiPrincipal::new(ZiRole::Admin), Some(constraints))
//!         .await;
//!     assert!(ok);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Lower-level operations return `Result<T, ZiError>`. The orchestrator's
//! `export` entry points never fail: they report through the notifier and
//! return a boolean.

#![allow(non_snake_case)]

pub mod access;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod notify;
pub mod operator;
pub mod operators;
pub mod record;
pub mod sample;

pub use access::{ZiPrincipal, ZiRole, ZiRoleFilter, ZiScopeContext, ZiScopeRule};
pub use config::ZiPortalConfig;
pub use dataset::{ZiDataProvider, ZiDatasetStore, ZiDatasetStoreBuilder, ZiLogicalType};
pub use errors::{Result, ZiError};
pub use export::{
    cell_text, export_file_name, format_field, format_lookup, produce_bytes, serialize_row,
    serialize_table,
    upload_template, upload_template_by_name, ZiColumn, ZiColumnKind, ZiCsvOutput,
    ZiDeliveredFile, ZiDelivery, ZiExportReceipt, ZiExportRequest, ZiExporter,
    ZiFileDelivery, ZiHeaderRegistry, ZiMemoryDelivery, ZiPreparedExport, NO_DATA_MESSAGE,
    NO_MATCH_MESSAGE, UTF8_BOM,
};
pub use ingest::ZiBulkUploadReader;
pub use notify::{ZiLogNotifier, ZiNotification, ZiNotificationLog, ZiNotifier, ZiSeverity};
pub use operator::{execute_operator, ZiOperator};
pub use operators::{ZiConstraint, ZiConstraintSet, ZiPredicateFilter};
pub use record::{ZiFieldPath, ZiFields, ZiLookup, ZiRecord, ZiRecordBatch, ZiValue};

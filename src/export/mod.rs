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

//! # Data Export Module
//!
//! Turns role-scoped record collections into downloadable CSV documents.
//!
//! ## Module Components
//!
//! - **format**: field, row and table serialization
//! - **headers**: static column layout per logical type
//! - **template**: two-line upload templates for bulk-upload authors
//! - **delivery**: byte production and delivery adapters
//! - **orchestrator**: the end-to-end export pipeline
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use ziportal::{ZiDatasetStore, ZiExporter, ZiFileDelivery, ZiLogNotifier, ZiPrincipal, ZiRole};
//!
//! # async fn run() {
//! let exporter = ZiExporter::new(
//!     Arc::new(ZiDatasetStore::sample()),
//!     Arc::new(ZiFileDelivery::new("exports")),
//!     Arc::new(ZiLogNotifier),
//! );
//! let ok = exporter.export_students(&ZiPrincipal::new(ZiRole::Admin), None).await;
//! # }
//! ```

pub mod delivery;
pub mod format;
pub mod headers;
pub mod orchestrator;
pub mod template;

pub use delivery::{produce_bytes, ZiDeliveredFile, ZiDelivery, ZiFileDelivery, ZiMemoryDelivery, UTF8_BOM};
pub use format::{
    cell_text, format_field, format_lookup, serialize_row, serialize_table, ZiCsvOutput,
    NO_DATA_MESSAGE,
};
pub use headers::{ZiColumn, ZiColumnKind, ZiHeaderRegistry};
pub use orchestrator::{
    export_file_name, ZiExportReceipt, ZiExportRequest, ZiExporter, ZiPreparedExport,
    NO_MATCH_MESSAGE,
};
pub use template::{supports_upload, upload_template, upload_template_by_name};

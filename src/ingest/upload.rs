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

//! # Bulk Upload Reader
//!
//! Reads CSV files written against an upload template back into records.
//! Column titles map to field keys through the header registry; dotted keys
//! rebuild nested objects and each cell is coerced to its column's kind.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;

use crate::dataset::ZiLogicalType;
use crate::errors::{Result, ZiError};
use crate::export::headers::{ZiColumn, ZiColumnKind, ZiHeaderRegistry};
use crate::export::template::supports_upload;
use crate::record::{ZiFieldPath, ZiRecord, ZiRecordBatch, ZiValue};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const REQUIRED_KEYS: [&str; 2] = ["id", "name"];

/// Parses bulk-upload CSV for one logical type.
#[derive(Debug)]
pub struct ZiBulkUploadReader {
    logical_type: ZiLogicalType,
    email_pattern: Regex,
}

impl ZiBulkUploadReader {
    #[allow(non_snake_case)]
    pub fn new(logical_type: ZiLogicalType) -> Result<Self> {
        if !supports_upload(logical_type) {
            return Err(ZiError::validation(format!(
                "bulk upload is not supported for '{logical_type}'"
            )));
        }
        let email_pattern = Regex::new(EMAIL_PATTERN)
            .map_err(|e| ZiError::validation(format!("invalid email pattern: {e}")))?;
        Ok(Self {
            logical_type,
            email_pattern,
        })
    }

    pub fn logical_type(&self) -> ZiLogicalType {
        self.logical_type
    }

    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<ZiRecordBatch> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.read_str(&text)
    }

    /// Parses CSV text; a leading byte-order mark is ignored.
    pub fn read_str(&self, text: &str) -> Result<ZiRecordBatch> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let columns = self.map_headers(csv_reader.headers()?)?;

        let mut batch = Vec::new();
        for (idx, row) in csv_reader.records().enumerate() {
            let row = row?;
            // header is line 1
            let line = idx + 2;
            batch.push(self.read_row(&columns, &row, line)?);
        }

        log::debug!(
            "read {} {} records from bulk upload",
            batch.len(),
            self.logical_type
        );
        Ok(batch)
    }

    fn map_headers(&self, headers: &csv::StringRecord) -> Result<Vec<&'static ZiColumn>> {
        let columns = headers
            .iter()
            .map(|title| {
                ZiHeaderRegistry::column_by_title(self.logical_type, title).ok_or_else(|| {
                    ZiError::validation(format!(
                        "unknown column '{}' for {}",
                        title.trim(),
                        self.logical_type
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for key in REQUIRED_KEYS {
            if !columns.iter().any(|column| column.key == key) {
                return Err(ZiError::validation(format!(
                    "missing required column for '{key}'"
                )));
            }
        }

        Ok(columns)
    }

    fn read_row(&self, columns: &[&ZiColumn], row: &csv::StringRecord, line: usize) -> Result<ZiRecord> {
        let mut record = ZiRecord::default();

        for (column, cell) in columns.iter().zip(row.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            let value = self.coerce(column, cell, line)?;
            let path = ZiFieldPath::parse(column.key)?;
            if !path.set_value(&mut record, value) {
                return Err(ZiError::validation(format!(
                    "line {line}: cannot set '{}'",
                    column.key
                )));
            }
        }

        for key in REQUIRED_KEYS {
            let present = record.text(key).map_or(false, |text| !text.is_empty());
            if !present {
                return Err(ZiError::validation(format!(
                    "line {line}: '{key}' is required"
                )));
            }
        }

        Ok(record)
    }

    fn coerce(&self, column: &ZiColumn, cell: &str, line: usize) -> Result<ZiValue> {
        let invalid = |expected: &str| {
            ZiError::validation(format!(
                "line {line}: column '{}' expects {expected}, got '{cell}'",
                column.title
            ))
        };

        let value = match column.kind {
            ZiColumnKind::Text => ZiValue::text(cell),
            ZiColumnKind::Number => cell
                .parse::<f64>()
                .map(ZiValue::Number)
                .map_err(|_| invalid("a number"))?,
            ZiColumnKind::Boolean => match cell.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => ZiValue::Bool(true),
                "false" | "no" | "n" | "0" => ZiValue::Bool(false),
                _ => return Err(invalid("true or false")),
            },
            ZiColumnKind::Date => NaiveDate::parse_from_str(cell, "%Y-%m-%d")
                .map(ZiValue::Date)
                .map_err(|_| invalid("a YYYY-MM-DD date"))?,
            ZiColumnKind::List => ZiValue::List(
                cell.split(';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(ZiValue::text)
                    .collect(),
            ),
        };

        if column.key.to_ascii_lowercase().ends_with("email") && !self.email_pattern.is_match(cell) {
            return Err(invalid("an email address"));
        }

        Ok(value)
    }
}

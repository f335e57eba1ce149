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

//! # CSV Formatting Module
//!
//! Field, row and table serialization for exported documents.
//!
//! Lines are written through a `csv` writer that quotes every field and
//! doubles embedded quotes. Fields are separated by `,` and lines by `\n`. An
//! empty record slice never renders a header-only document; it yields
//! [`ZiCsvOutput::NoData`] instead.

use std::fmt;

use crate::errors::{Result, ZiError};
use crate::export::headers::ZiColumn;
use crate::record::{ZiFieldPath, ZiLookup, ZiRecord, ZiValue};

/// Human-readable text shown for an empty export.
pub const NO_DATA_MESSAGE: &str = "No data available for export";

/// Result of serializing a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZiCsvOutput {
    /// Complete CSV text: header line plus one line per record.
    Document(String),
    /// The record slice was empty.
    NoData,
}

impl ZiCsvOutput {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ZiCsvOutput::NoData)
    }

    pub fn document(&self) -> Option<&str> {
        match self {
            ZiCsvOutput::Document(text) => Some(text),
            ZiCsvOutput::NoData => None,
        }
    }
}

impl fmt::Display for ZiCsvOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZiCsvOutput::Document(text) => f.write_str(text),
            ZiCsvOutput::NoData => f.write_str(NO_DATA_MESSAGE),
        }
    }
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

/// Writes each line through one writer and returns the text without the
/// final terminator.
fn write_lines<L, C>(lines: L) -> Result<String>
where
    L: IntoIterator,
    L::Item: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut writer = csv_writer();
    for line in lines {
        writer
            .write_record(line)
            .map_err(|err| ZiError::serialization(err.to_string()))?;
    }
    let mut bytes = writer
        .into_inner()
        .map_err(|err| ZiError::serialization(err.to_string()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|err| ZiError::serialization(err.to_string()))
}

/// Plain cell text for a value, before quoting.
pub fn cell_text(value: &ZiValue) -> String {
    value.to_plain_text()
}

/// Formats one value as a quoted CSV token. Never fails.
pub fn format_field(value: &ZiValue) -> String {
    // in-memory writes cannot fail
    write_lines([[cell_text(value)]]).unwrap_or_default()
}

/// Formats a resolved lookup; absent values render as `""`.
pub fn format_lookup(lookup: ZiLookup<'_>) -> String {
    match lookup {
        ZiLookup::Present(value) => format_field(value),
        ZiLookup::Absent => format_field(&ZiValue::Null),
    }
}

fn row_cells<K: AsRef<str>>(keys: &[K], record: &ZiRecord) -> Vec<String> {
    keys.iter()
        .map(|key| {
            let lookup = ZiFieldPath::parse(key.as_ref())
                .map(|path| path.resolve(record))
                .unwrap_or(ZiLookup::Absent);
            match lookup {
                ZiLookup::Present(value) => cell_text(value),
                ZiLookup::Absent => String::new(),
            }
        })
        .collect()
}

/// Serializes one record over the given field keys (dotted paths allowed).
///
/// The output carries no trailing newline.
pub fn serialize_row<K: AsRef<str>>(keys: &[K], record: &ZiRecord) -> Result<String> {
    if keys.is_empty() {
        return Ok(String::new());
    }
    write_lines([row_cells(keys, record)])
}

/// Serializes a header line plus one line per record.
pub fn serialize_table(columns: &[ZiColumn], records: &[ZiRecord]) -> Result<ZiCsvOutput> {
    if records.is_empty() {
        return Ok(ZiCsvOutput::NoData);
    }

    let keys: Vec<&str> = columns.iter().map(|column| column.key).collect();
    let header: Vec<String> = columns
        .iter()
        .map(|column| column.title.to_string())
        .collect();
    let lines = std::iter::once(header).chain(records.iter().map(|record| row_cells(&keys, record)));

    write_lines(lines).map(ZiCsvOutput::Document)
}

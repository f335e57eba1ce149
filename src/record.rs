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

//! # Zi Portal Record Module
//!
//! Core data structures for the domain entities that flow through the export
//! pipeline: students, companies, applications and the rest.
//!
//! ## Design Principles
//!
//! - **Tagged values**: field values are a closed [`ZiValue`] union instead of
//!   loosely typed JSON, so dates and lists format deterministically
//! - **Schema-free records**: any field may be absent; lookups return an
//!   explicit [`ZiLookup::Absent`] rather than failing
//! - **JSON interop**: values convert to and from `serde_json::Value`, which is
//!   how fixtures and dataset files are written
//!
//! ## Usage Example
//!
//! ```rust
//! use ziportal::record::{ZiFieldPath, ZiRecord};
//! use serde_json::json;
//!
//! let record = ZiRecord::from_json(json!({
//!     "name": "Aarav",
//!     "address": {"city": "Pune"}
//! }));
//!
//! let path = ZiFieldPath::parse("address.city")?;
//! assert_eq!(path.resolve(&record).value().and_then(|v| v.as_str()), Some("Pune"));
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::errors::{Result, ZiError};

/// Named fields of a record or nested object.
pub type ZiFields = BTreeMap<String, ZiValue>;

/// A single field value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ZiValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Calendar date, rendered as `YYYY-MM-DD`.
    Date(NaiveDate),
    List(Vec<ZiValue>),
    Object(ZiFields),
}

impl ZiValue {
    pub fn text(value: impl Into<String>) -> Self {
        ZiValue::Text(value.into())
    }

    /// Builds a date value, or `Null` when the calendar date does not exist.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(ZiValue::Date)
            .unwrap_or(ZiValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ZiValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ZiValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ZiValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ZiValue::Null)
    }

    /// Unquoted textual form of the value.
    ///
    /// Lists join their elements with `"; "`, dates use ISO calendar form and
    /// objects serialize to compact JSON.
    pub fn to_plain_text(&self) -> String {
        match self {
            ZiValue::Null => String::new(),
            ZiValue::Bool(flag) => flag.to_string(),
            ZiValue::Number(number) => format_number(*number),
            ZiValue::Text(text) => text.clone(),
            ZiValue::Date(date) => date.format("%Y-%m-%d").to_string(),
            ZiValue::List(items) => items
                .iter()
                .map(ZiValue::to_plain_text)
                .collect::<Vec<_>>()
                .join("; "),
            ZiValue::Object(_) => {
                serde_json::to_string(&Value::from(self.clone())).unwrap_or_default()
            }
        }
    }
}

// f64's Display already prints integral values without a fraction ("8", not "8.0").
fn format_number(number: f64) -> String {
    if number == 0.0 {
        return "0".to_string();
    }
    number.to_string()
}

impl From<Value> for ZiValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ZiValue::Null,
            Value::Bool(flag) => ZiValue::Bool(flag),
            Value::Number(number) => number
                .as_f64()
                .map(ZiValue::Number)
                .unwrap_or(ZiValue::Null),
            Value::String(text) => ZiValue::Text(text),
            Value::Array(items) => ZiValue::List(items.into_iter().map(ZiValue::from).collect()),
            Value::Object(map) => ZiValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, ZiValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<ZiValue> for Value {
    fn from(value: ZiValue) -> Self {
        match value {
            ZiValue::Null => Value::Null,
            ZiValue::Bool(flag) => Value::Bool(flag),
            ZiValue::Number(number) => Number::from_f64(number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ZiValue::Text(text) => Value::String(text),
            ZiValue::Date(date) => Value::String(date.format("%Y-%m-%d").to_string()),
            ZiValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            ZiValue::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&str> for ZiValue {
    fn from(value: &str) -> Self {
        ZiValue::Text(value.to_string())
    }
}

impl From<String> for ZiValue {
    fn from(value: String) -> Self {
        ZiValue::Text(value)
    }
}

impl From<f64> for ZiValue {
    fn from(value: f64) -> Self {
        ZiValue::Number(value)
    }
}

impl From<bool> for ZiValue {
    fn from(value: bool) -> Self {
        ZiValue::Bool(value)
    }
}

impl From<NaiveDate> for ZiValue {
    fn from(value: NaiveDate) -> Self {
        ZiValue::Date(value)
    }
}

/// Outcome of resolving a field path against a record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZiLookup<'a> {
    Present(&'a ZiValue),
    Absent,
}

impl<'a> ZiLookup<'a> {
    pub fn value(self) -> Option<&'a ZiValue> {
        match self {
            ZiLookup::Present(value) => Some(value),
            ZiLookup::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ZiLookup::Absent)
    }
}

/// One domain entity: a student, company, application, and so on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiRecord {
    pub fields: ZiFields,
}

impl ZiRecord {
    #[allow(non_snake_case)]
    pub fn new(fields: ZiFields) -> Self {
        Self { fields }
    }

    /// Builds a record from a JSON object. Non-object values yield an empty record.
    #[allow(non_snake_case)]
    pub fn from_json(value: Value) -> Self {
        match ZiValue::from(value) {
            ZiValue::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Sets a top-level field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<ZiValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Direct, non-dotted field access.
    pub fn get(&self, key: &str) -> ZiLookup<'_> {
        match self.fields.get(key) {
            Some(value) => ZiLookup::Present(value),
            None => ZiLookup::Absent,
        }
    }

    /// Convenience accessor for text fields.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(ZiValue::as_str)
    }

    pub fn to_json(&self) -> Value {
        Value::from(ZiValue::Object(self.fields.clone()))
    }
}

/// Convenience alias for working on batches of records.
pub type ZiRecordBatch = Vec<ZiRecord>;

/// Dot-delimited path into a record's nested objects, e.g. `address.city`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiFieldPath {
    segments: Vec<String>,
}

impl ZiFieldPath {
    #[allow(non_snake_case)]
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<String> = path
            .split('.')
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(ZiError::validation("field path may not be empty"));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks the record along the path. Missing segments and non-object
    /// intermediates resolve to [`ZiLookup::Absent`].
    #[allow(non_snake_case)]
    pub fn resolve<'a>(&self, record: &'a ZiRecord) -> ZiLookup<'a> {
        let mut segments = self.segments.iter();
        let Some(first) = segments.next() else {
            return ZiLookup::Absent;
        };
        let Some(mut current) = record.fields.get(first) else {
            return ZiLookup::Absent;
        };
        for segment in segments {
            current = match current {
                ZiValue::Object(map) => match map.get(segment) {
                    Some(value) => value,
                    None => return ZiLookup::Absent,
                },
                _ => return ZiLookup::Absent,
            };
        }
        ZiLookup::Present(current)
    }

    /// Writes a value at the path, creating intermediate objects as needed.
    ///
    /// Returns false when an intermediate segment holds a non-object value.
    #[allow(non_snake_case)]
    pub fn set_value(&self, record: &mut ZiRecord, value: ZiValue) -> bool {
        let Some((last, parents)) = self.segments.split_last() else {
            return false;
        };
        let mut current = &mut record.fields;
        for seg in parents {
            let entry = current
                .entry(seg.clone())
                .or_insert_with(|| ZiValue::Object(ZiFields::new()));
            current = match entry {
                ZiValue::Object(map) => map,
                _ => return false,
            };
        }
        current.insert(last.clone(), value);
        true
    }
}

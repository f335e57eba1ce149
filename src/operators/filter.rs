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

use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::operator::ZiOperator;
use crate::record::{ZiRecord, ZiRecordBatch, ZiValue};

/// A single field-level constraint.
#[derive(Clone, Debug, PartialEq)]
pub enum ZiConstraint {
    /// Passes every record.
    Any,
    /// Field equals the value; numbers compare numerically.
    Exact(ZiValue),
    /// Case-insensitive substring of the field's textual form.
    Contains(String),
    /// Inclusive numeric range; either bound may be open.
    Range { min: Option<f64>, max: Option<f64> },
}

impl ZiConstraint {
    pub fn between(min: f64, max: f64) -> Self {
        ZiConstraint::Range {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(needle: impl Into<String>) -> Self {
        ZiConstraint::Contains(needle.into())
    }

    /// Parses the JSON form used by dashboards:
    /// `null`/`"all"` → any, string → contains, `{min, max}` → range,
    /// anything else → exact.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(ZiConstraint::Any),
            Value::String(text) if text.eq_ignore_ascii_case("all") => Ok(ZiConstraint::Any),
            Value::String(text) => Ok(ZiConstraint::Contains(text.clone())),
            Value::Object(map) if map.contains_key("min") || map.contains_key("max") => {
                let bound = |key: &str| -> Result<Option<f64>> {
                    match map.get(key) {
                        None | Some(Value::Null) => Ok(None),
                        Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                            ZiError::validation(format!("range '{key}' must be numeric"))
                        }),
                    }
                };
                let min = bound("min")?;
                let max = bound("max")?;
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(ZiError::validation("range 'min' may not exceed 'max'"));
                    }
                }
                Ok(ZiConstraint::Range { min, max })
            }
            other => Ok(ZiConstraint::Exact(ZiValue::from(other.clone()))),
        }
    }

    /// Returns true when `record` satisfies the constraint on `field`.
    pub fn matches(&self, record: &ZiRecord, field: &str) -> bool {
        if matches!(self, ZiConstraint::Any) {
            return true;
        }
        let Some(value) = record.get(field).value() else {
            return false;
        };
        match self {
            ZiConstraint::Any => true,
            ZiConstraint::Exact(expected) => value == expected,
            ZiConstraint::Contains(needle) => value
                .to_plain_text()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            ZiConstraint::Range { min, max } => match value.as_f64() {
                Some(number) => {
                    min.map_or(true, |min| number >= min) && max.map_or(true, |max| number <= max)
                }
                None => false,
            },
        }
    }
}

/// Field constraints combined with logical AND.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZiConstraintSet {
    constraints: Vec<(String, ZiConstraint)>,
}

impl ZiConstraintSet {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint on a direct (non-dotted) field.
    pub fn with(mut self, field: impl Into<String>, constraint: ZiConstraint) -> Self {
        self.constraints.push((field.into(), constraint));
        self
    }

    /// Parses a JSON object mapping field names to constraint values.
    pub fn from_json(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| ZiError::validation("constraints must be an object"))?;

        let constraints = obj
            .iter()
            .map(|(field, value)| Ok((field.clone(), ZiConstraint::from_json(value)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { constraints })
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn matches(&self, record: &ZiRecord) -> bool {
        self.constraints
            .iter()
            .all(|(field, constraint)| constraint.matches(record, field))
    }
}

/// Keeps records satisfying every constraint of a [`ZiConstraintSet`].
#[derive(Debug)]
pub struct ZiPredicateFilter {
    constraints: ZiConstraintSet,
}

impl ZiPredicateFilter {
    #[allow(non_snake_case)]
    pub fn new(constraints: ZiConstraintSet) -> Self {
        Self { constraints }
    }
}

impl ZiOperator for ZiPredicateFilter {
    fn name(&self) -> &'static str {
        "filter.predicate"
    }

    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        Ok(batch
            .into_iter()
            .filter(|record| self.constraints.matches(record))
            .collect())
    }
}

/// Factory that constructs [`ZiPredicateFilter`] from JSON configuration.
#[allow(non_snake_case)]
pub fn predicate_filter_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    let constraints = ZiConstraintSet::from_json(config)?;
    Ok(Box::new(ZiPredicateFilter::new(constraints)))
}

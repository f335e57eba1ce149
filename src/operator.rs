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

//! # Zi Portal Operator Module
//!
//! Operators receive a batch of records and return a new batch. The export
//! pipeline runs its record-narrowing steps through this trait so that each
//! step reports failures under its own name.

use crate::errors::{Result, ZiError};
use crate::record::ZiRecordBatch;

/// Contract for a batch-to-batch record operator.
pub trait ZiOperator: std::fmt::Debug {
    /// Unique, human-readable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Applies the operator to an incoming batch of records.
    ///
    /// The operator may return fewer records than it receives, including none.
    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch>;
}

/// Executes an operator, prefixing any error with the operator's name.
///
/// Validation errors are rewrapped; the typed "no data" outcomes pass through
/// unchanged so callers can still match on them.
#[allow(non_snake_case)]
pub fn execute_operator(operator: &dyn ZiOperator, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
    let input = batch.len();
    let output = operator.apply(batch).map_err(|err| match err {
        ZiError::Validation { message } => {
            ZiError::validation(format!("{}: {}", operator.name(), message))
        }
        other => other,
    })?;
    log::debug!("{} kept {} of {} records", operator.name(), output.len(), input);
    Ok(output)
}

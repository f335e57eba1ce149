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

//! # Zi Portal Error Module
//!
//! This module defines the error types used throughout the export pipeline.
//!
//! ## Error Categories
//!
//! - **NoDataForRole**: The role filter produced an empty slice
//! - **NoDataAfterFilter**: Predicate constraints eliminated every record
//! - **UnknownLogicalType**: No header map exists for the requested type
//! - **Serialization**: Failures while composing CSV text
//! - **Delivery**: The produced bytes could not be handed to the user
//! - **Io / Serde / Csv**: Ambient failures from file and format handling
//! - **Validation / Config**: Invalid inputs or configuration
//!
//! The export orchestrator recovers every variant locally and reduces it to a
//! boolean outcome plus a notification; the typed errors are only visible
//! through `try_export` and the lower-level building blocks.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Portal.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Portal.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// The role filter returned no records for this role and type.
    #[error("no data available for role '{role}' and type '{logical_type}'")]
    NoDataForRole { role: String, logical_type: String },

    /// Predicate constraints removed every record.
    #[error("no data matches the filters for type '{logical_type}'")]
    NoDataAfterFilter { logical_type: String },

    /// The header map registry has no entry for the requested type.
    #[error("unknown logical type '{0}'")]
    UnknownLogicalType(String),

    /// Failures while composing the CSV document.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Failures while delivering produced bytes.
    #[error("delivery of '{file_name}' failed: {message}")]
    Delivery { file_name: String, message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serde error: {0}")]
    Serde(String),

    /// Errors raised by the CSV reader.
    #[error("csv error: {0}")]
    Csv(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<csv::Error> for ZiError {
    fn from(err: csv::Error) -> Self {
        ZiError::Csv(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct delivery errors.
    pub fn delivery(file_name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Delivery {
            file_name: file_name.into(),
            message: message.into(),
        }
    }

    pub fn no_data_for_role(role: impl Into<String>, logical_type: impl Into<String>) -> Self {
        ZiError::NoDataForRole {
            role: role.into(),
            logical_type: logical_type.into(),
        }
    }

    pub fn no_data_after_filter(logical_type: impl Into<String>) -> Self {
        ZiError::NoDataAfterFilter {
            logical_type: logical_type.into(),
        }
    }

    /// Helper to construct serialization errors.
    pub fn serialization<T: Into<String>>(message: T) -> Self {
        ZiError::Serialization(message.into())
    }

    /// Helper to construct config errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        ZiError::Config(message.into())
    }

    /// Returns true for the two "nothing to export" outcomes.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            ZiError::NoDataForRole { .. } | ZiError::NoDataAfterFilter { .. }
        )
    }
}

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

//! # Zi Portal Ingest Tests - Upload
//!
//! Tests for upload templates and the bulk-upload reader.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test upload
//! ```

use std::io::Write;

use ziportal::sample;
use ziportal::{
    produce_bytes, serialize_table, upload_template, upload_template_by_name,
    ZiBulkUploadReader, ZiHeaderRegistry, ZiLogicalType,
};

/// Only students and companies have upload templates.
#[test]
fn test_templates_exist_for_upload_types_only() {
    assert!(upload_template(ZiLogicalType::Students).is_some());
    assert!(upload_template(ZiLogicalType::Companies).is_some());
    for logical_type in [
        ZiLogicalType::Applications,
        ZiLogicalType::Training,
        ZiLogicalType::Faculty,
        ZiLogicalType::Operations,
        ZiLogicalType::Budget,
    ] {
        assert!(upload_template(logical_type).is_none(), "{logical_type}");
    }
    assert!(upload_template_by_name("unknown").is_none());
}

/// A template is a header line plus exactly one example row.
#[test]
fn test_template_has_header_and_example() {
    let template = upload_template_by_name("students").unwrap();
    let lines: Vec<&str> = template.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(r#""Student ID","Full Name","Email Address""#));
}

/// Each template reads back as a single valid record.
#[test]
fn test_template_reads_back() {
    for logical_type in [ZiLogicalType::Students, ZiLogicalType::Companies] {
        let template = upload_template(logical_type).unwrap();
        let batch = ZiBulkUploadReader::new(logical_type)
            .unwrap()
            .read_str(&template)
            .unwrap();
        assert_eq!(batch.len(), 1, "{logical_type}");
    }
}

/// Exported sample students read back identical to the source records.
#[test]
fn test_exported_students_read_back_unchanged() {
    let students = sample::students();
    let csv = serialize_table(ZiHeaderRegistry::columns(ZiLogicalType::Students), &students).unwrap();
    let bytes = produce_bytes(csv.document().unwrap(), true);
    let text = String::from_utf8(bytes).unwrap();

    let batch = ZiBulkUploadReader::new(ZiLogicalType::Students)
        .unwrap()
        .read_str(&text)
        .unwrap();
    assert_eq!(batch, students);
}

/// Company names with quotes and commas survive a file round trip.
#[test]
fn test_exported_companies_read_back_from_file() {
    let companies = sample::companies();
    let csv = serialize_table(ZiHeaderRegistry::columns(ZiLogicalType::Companies), &companies).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(csv.document().unwrap().as_bytes()).unwrap();

    let batch = ZiBulkUploadReader::new(ZiLogicalType::Companies)
        .unwrap()
        .read_path(file.path())
        .unwrap();
    assert_eq!(batch, companies);
    assert_eq!(batch[2].text("name"), Some("Zoho \"Labs\""));
}

/// An invalid email address is rejected with its line number.
#[test]
fn test_invalid_email_is_rejected() {
    let reader = ZiBulkUploadReader::new(ZiLogicalType::Students).unwrap();
    let text = "Student ID,Full Name,Email Address\nSTU1,Asha,asha@uni.edu\nSTU2,Ravi,not-an-email\n";

    let err = reader.read_str(text).unwrap_err();
    assert!(err.to_string().contains("line 3"), "{err}");
}

/// Rows missing an id or name are rejected.
#[test]
fn test_missing_required_values_are_rejected() {
    let reader = ZiBulkUploadReader::new(ZiLogicalType::Companies).unwrap();
    assert!(reader.read_str("Company ID,Company Name\nCMP9,\n").is_err());
    assert!(reader.read_str("Company Name,Industry\nAcme,Retail\n").is_err());
}

/// Types without templates cannot be bulk uploaded.
#[test]
fn test_unsupported_types_are_rejected() {
    assert!(ZiBulkUploadReader::new(ZiLogicalType::Applications).is_err());
    assert!(ZiBulkUploadReader::new(ZiLogicalType::Faculty).is_err());
}

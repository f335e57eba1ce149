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

//! Upload templates: a header line plus one example row, guiding authors of
//! bulk-upload files. Only students and companies accept bulk uploads.

use serde_json::json;

use crate::dataset::ZiLogicalType;
use crate::export::format::{serialize_table, ZiCsvOutput};
use crate::export::headers::ZiHeaderRegistry;
use crate::record::{ZiRecord, ZiValue};

/// Returns true for types that accept bulk uploads.
pub fn supports_upload(logical_type: ZiLogicalType) -> bool {
    matches!(
        logical_type,
        ZiLogicalType::Students | ZiLogicalType::Companies
    )
}

/// Two-line CSV template for `logical_type`, or `None` when the type does not
/// accept bulk uploads.
pub fn upload_template(logical_type: ZiLogicalType) -> Option<String> {
    let example = example_record(logical_type)?;
    match serialize_table(ZiHeaderRegistry::columns(logical_type), &[example]) {
        Ok(ZiCsvOutput::Document(text)) => Some(text),
        Ok(ZiCsvOutput::NoData) => None,
        Err(err) => {
            log::warn!("upload template for {} failed: {}", logical_type, err);
            None
        }
    }
}

/// Same as [`upload_template`], looked up by type name.
pub fn upload_template_by_name(name: &str) -> Option<String> {
    ZiLogicalType::from_name(name).and_then(upload_template)
}

fn example_record(logical_type: ZiLogicalType) -> Option<ZiRecord> {
    match logical_type {
        ZiLogicalType::Students => Some(
            ZiRecord::from_json(json!({
                "id": "STU100",
                "name": "Firstname Lastname",
                "email": "firstname.lastname@university.edu",
                "phone": "+91 90000 00000",
                "department": "Computer Science",
                "year": 4,
                "cgpa": 8.5,
                "skills": ["Python", "SQL"],
                "placementRegistered": true,
                "placementStatus": "Unplaced",
                "address": {"city": "Pune", "state": "Maharashtra"},
                "parentDetails": {"fatherName": "Parent Name", "contact": "+91 90000 00001"}
            }))
            .with_field("dateOfBirth", ZiValue::date(2003, 1, 1)),
        ),
        ZiLogicalType::Companies => Some(
            ZiRecord::from_json(json!({
                "id": "CMP100",
                "name": "Company Name",
                "industry": "IT Services",
                "location": "Bengaluru",
                "package": 6.0,
                "positions": ["Software Engineer", "Analyst"],
                "contactPerson": {"name": "Recruiter Name", "email": "recruiter@company.com"},
                "status": "Active"
            }))
            .with_field("visitDate", ZiValue::date(2025, 1, 15)),
        ),
        _ => None,
    }
}

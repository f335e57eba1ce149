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

//! # Header Map Registry
//!
//! Static column layout per logical type. Column order in this table is the
//! column order of every exported document.

use crate::dataset::ZiLogicalType;

/// Value shape of a column, used when reading bulk uploads back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiColumnKind {
    Text,
    Number,
    Boolean,
    Date,
    /// `"; "`-separated list of text items.
    List,
}

/// One output column: a dotted field key and its display title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZiColumn {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ZiColumnKind,
}

impl ZiColumn {
    pub const fn new(key: &'static str, title: &'static str, kind: ZiColumnKind) -> Self {
        Self { key, title, kind }
    }
}

use ZiColumnKind::{Boolean, Date, List, Number, Text};

const STUDENTS: &[ZiColumn] = &[
    ZiColumn::new("id", "Student ID", Text),
    ZiColumn::new("name", "Full Name", Text),
    ZiColumn::new("email", "Email Address", Text),
    ZiColumn::new("phone", "Phone Number", Text),
    ZiColumn::new("department", "Department", Text),
    ZiColumn::new("year", "Year", Number),
    ZiColumn::new("cgpa", "CGPA", Number),
    ZiColumn::new("skills", "Skills", List),
    ZiColumn::new("placementRegistered", "Registered for Placement", Boolean),
    ZiColumn::new("placementStatus", "Placement Status", Text),
    ZiColumn::new("dateOfBirth", "Date of Birth", Date),
    ZiColumn::new("address.city", "City", Text),
    ZiColumn::new("address.state", "State", Text),
    ZiColumn::new("parentDetails.fatherName", "Father's Name", Text),
    ZiColumn::new("parentDetails.contact", "Parent Contact", Text),
];

const COMPANIES: &[ZiColumn] = &[
    ZiColumn::new("id", "Company ID", Text),
    ZiColumn::new("name", "Company Name", Text),
    ZiColumn::new("industry", "Industry", Text),
    ZiColumn::new("location", "Location", Text),
    ZiColumn::new("package", "Package (LPA)", Number),
    ZiColumn::new("positions", "Open Positions", List),
    ZiColumn::new("contactPerson.name", "Contact Person", Text),
    ZiColumn::new("contactPerson.email", "Contact Email", Text),
    ZiColumn::new("status", "Status", Text),
    ZiColumn::new("visitDate", "Visit Date", Date),
];

const APPLICATIONS: &[ZiColumn] = &[
    ZiColumn::new("id", "Application ID", Text),
    ZiColumn::new("studentId", "Student ID", Text),
    ZiColumn::new("studentName", "Student Name", Text),
    ZiColumn::new("companyId", "Company ID", Text),
    ZiColumn::new("companyName", "Company", Text),
    ZiColumn::new("position", "Position", Text),
    ZiColumn::new("status", "Status", Text),
    ZiColumn::new("appliedDate", "Applied On", Date),
    ZiColumn::new("interviewDate", "Interview Date", Date),
];

const TRAINING: &[ZiColumn] = &[
    ZiColumn::new("id", "Program ID", Text),
    ZiColumn::new("title", "Program Title", Text),
    ZiColumn::new("instructor", "Instructor", Text),
    ZiColumn::new("category", "Category", Text),
    ZiColumn::new("duration", "Duration", Text),
    ZiColumn::new("startDate", "Start Date", Date),
    ZiColumn::new("enrolled", "Enrolled", Number),
    ZiColumn::new("capacity", "Capacity", Number),
    ZiColumn::new("status", "Status", Text),
];

const FACULTY: &[ZiColumn] = &[
    ZiColumn::new("id", "Faculty ID", Text),
    ZiColumn::new("name", "Name", Text),
    ZiColumn::new("email", "Email", Text),
    ZiColumn::new("department", "Department", Text),
    ZiColumn::new("designation", "Designation", Text),
    ZiColumn::new("specialization", "Specialization", List),
    ZiColumn::new("experience", "Experience (Years)", Number),
    ZiColumn::new("studentsMentored", "Students Mentored", Number),
];

const OPERATIONS: &[ZiColumn] = &[
    ZiColumn::new("id", "Report ID", Text),
    ZiColumn::new("title", "Report", Text),
    ZiColumn::new("category", "Category", Text),
    ZiColumn::new("period", "Period", Text),
    ZiColumn::new("owner", "Owner", Text),
    ZiColumn::new("status", "Status", Text),
    ZiColumn::new("generatedOn", "Generated On", Date),
    ZiColumn::new("metrics.placementRate", "Placement Rate (%)", Number),
    ZiColumn::new("metrics.averagePackage", "Average Package (LPA)", Number),
];

const BUDGET: &[ZiColumn] = &[
    ZiColumn::new("id", "Line ID", Text),
    ZiColumn::new("category", "Category", Text),
    ZiColumn::new("description", "Description", Text),
    ZiColumn::new("allocated", "Allocated (₹)", Number),
    ZiColumn::new("spent", "Spent (₹)", Number),
    ZiColumn::new("remaining", "Remaining (₹)", Number),
    ZiColumn::new("fiscalYear", "Fiscal Year", Text),
    ZiColumn::new("approvedBy", "Approved By", Text),
];

/// Lookup over the static header maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiHeaderRegistry;

impl ZiHeaderRegistry {
    pub fn columns(logical_type: ZiLogicalType) -> &'static [ZiColumn] {
        match logical_type {
            ZiLogicalType::Students | ZiLogicalType::Profile => STUDENTS,
            ZiLogicalType::Companies => COMPANIES,
            ZiLogicalType::Applications => APPLICATIONS,
            ZiLogicalType::Training => TRAINING,
            ZiLogicalType::Faculty => FACULTY,
            ZiLogicalType::Operations => OPERATIONS,
            ZiLogicalType::Budget => BUDGET,
        }
    }

    /// Columns for a type name. Unknown names yield an empty slice, which
    /// callers must treat as "cannot export".
    pub fn lookup(name: &str) -> &'static [ZiColumn] {
        ZiLogicalType::from_name(name)
            .map(Self::columns)
            .unwrap_or(&[])
    }

    /// Finds the column whose display title matches `title`.
    pub fn column_by_title(logical_type: ZiLogicalType, title: &str) -> Option<&'static ZiColumn> {
        let title = title.trim();
        Self::columns(logical_type)
            .iter()
            .find(|column| column.title == title)
    }
}

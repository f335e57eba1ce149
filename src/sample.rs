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

//! Bundled sample data for every logical type.

use serde_json::json;

use crate::dataset::{ZiDatasetStore, ZiLogicalType};
use crate::record::{ZiRecord, ZiRecordBatch, ZiValue};

pub(crate) fn sample_store() -> ZiDatasetStore {
    ZiDatasetStore::builder()
        .with_dataset(ZiLogicalType::Students, students())
        .with_dataset(ZiLogicalType::Companies, companies())
        .with_dataset(ZiLogicalType::Applications, applications())
        .with_dataset(ZiLogicalType::Training, training())
        .with_dataset(ZiLogicalType::Faculty, faculty())
        .with_dataset(ZiLogicalType::Operations, operations())
        .with_dataset(ZiLogicalType::Budget, budget())
        .build()
}

pub fn students() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "STU001",
            "name": "Aarav Sharma",
            "email": "aarav.sharma@university.edu",
            "phone": "+91 98765 43210",
            "department": "Computer Science",
            "year": 4,
            "cgpa": 8.95,
            "skills": ["Rust", "Python", "SQL"],
            "placementRegistered": true,
            "placementStatus": "Placed",
            "address": {"city": "Pune", "state": "Maharashtra"},
            "parentDetails": {"fatherName": "Rajiv Sharma", "contact": "+91 98220 11111"}
        }))
        .with_field("dateOfBirth", ZiValue::date(2002, 5, 14)),
        ZiRecord::from_json(json!({
            "id": "STU002",
            "name": "Priya Patel",
            "email": "priya.patel@university.edu",
            "phone": "+91 98123 45678",
            "department": "Computer Science",
            "year": 4,
            "cgpa": 9.12,
            "skills": ["Java", "Spring", "Kubernetes"],
            "placementRegistered": true,
            "placementStatus": "In Process",
            "address": {"city": "Ahmedabad", "state": "Gujarat"},
            "parentDetails": {"fatherName": "Mahesh Patel", "contact": "+91 98250 22222"}
        }))
        .with_field("dateOfBirth", ZiValue::date(2002, 11, 2)),
        ZiRecord::from_json(json!({
            "id": "STU003",
            "name": "Rohan Verma",
            "email": "rohan.verma@university.edu",
            "phone": "+91 99887 76655",
            "department": "Electronics",
            "year": 4,
            "cgpa": 8.67,
            "skills": ["VLSI", "Embedded C"],
            "placementRegistered": true,
            "placementStatus": "In Process",
            "address": {"city": "Lucknow", "state": "Uttar Pradesh"},
            "parentDetails": {"fatherName": "Anil Verma", "contact": "+91 94150 33333"}
        }))
        .with_field("dateOfBirth", ZiValue::date(2001, 8, 23)),
        ZiRecord::from_json(json!({
            "id": "STU004",
            "name": "Sneha Iyer",
            "email": "sneha.iyer@university.edu",
            "phone": "+91 97654 32109",
            "department": "Mechanical",
            "year": 3,
            "cgpa": 8.45,
            "skills": ["AutoCAD", "SolidWorks"],
            "placementRegistered": false,
            "placementStatus": "Not Registered",
            "address": {"city": "Chennai", "state": "Tamil Nadu"},
            "parentDetails": {"fatherName": "Venkat Iyer", "contact": "+91 94440 44444"}
        }))
        .with_field("dateOfBirth", ZiValue::date(2003, 1, 30)),
        ZiRecord::from_json(json!({
            "id": "STU005",
            "name": "Karan Mehta",
            "email": "karan.mehta@university.edu",
            "phone": "+91 90000 12345",
            "department": "Computer Science",
            "year": 4,
            "cgpa": 7.89,
            "skills": ["JavaScript", "React"],
            "placementRegistered": true,
            "placementStatus": "Unplaced",
            "address": {"city": "Jaipur", "state": "Rajasthan"},
            "parentDetails": {"fatherName": "Sunil Mehta", "contact": "+91 94140 55555"}
        }))
        .with_field("dateOfBirth", ZiValue::date(2002, 7, 9)),
    ]
}

pub fn companies() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "CMP001",
            "name": "Infosys",
            "industry": "IT Services",
            "location": "Bengaluru",
            "package": 6.5,
            "positions": ["Systems Engineer", "Digital Specialist"],
            "contactPerson": {"name": "Meera Rao", "email": "meera.rao@infosys.com"},
            "status": "Active"
        }))
        .with_field("visitDate", ZiValue::date(2024, 9, 12)),
        ZiRecord::from_json(json!({
            "id": "CMP002",
            "name": "Tata Consultancy Services",
            "industry": "IT Services",
            "location": "Mumbai",
            "package": 7.0,
            "positions": ["Assistant System Engineer"],
            "contactPerson": {"name": "Vikram Singh", "email": "vikram.singh@tcs.com"},
            "status": "Active"
        }))
        .with_field("visitDate", ZiValue::date(2024, 10, 3)),
        ZiRecord::from_json(json!({
            "id": "CMP003",
            "name": "Zoho \"Labs\"",
            "industry": "Product, SaaS",
            "location": "Chennai",
            "package": 12.0,
            "positions": ["Member Technical Staff"],
            "contactPerson": {"name": "Lakshmi Narayanan", "email": "lakshmi.n@zoho.com"},
            "status": "Scheduled"
        }))
        .with_field("visitDate", ZiValue::date(2024, 11, 18)),
        ZiRecord::from_json(json!({
            "id": "CMP004",
            "name": "Larsen & Toubro",
            "industry": "Engineering",
            "location": "Mumbai",
            "package": 5.8,
            "positions": ["Graduate Engineer Trainee"],
            "contactPerson": {"name": "Arjun Pillai", "email": "arjun.pillai@lnt.com"},
            "status": "Completed"
        }))
        .with_field("visitDate", ZiValue::date(2024, 8, 21)),
    ]
}

pub fn applications() -> ZiRecordBatch {
    let rows = [
        ("APP001", "STU001", "Aarav Sharma", "CMP001", "Infosys", "Systems Engineer", "Selected", (2024, 9, 1), Some((2024, 9, 12))),
        ("APP002", "STU002", "Priya Patel", "CMP002", "Tata Consultancy Services", "Assistant System Engineer", "Interview Scheduled", (2024, 9, 20), Some((2024, 10, 3))),
        ("APP003", "STU001", "Aarav Sharma", "CMP003", "Zoho \"Labs\"", "Member Technical Staff", "Applied", (2024, 10, 15), None),
        ("APP004", "STU003", "Rohan Verma", "CMP002", "Tata Consultancy Services", "Assistant System Engineer", "Shortlisted", (2024, 9, 22), Some((2024, 10, 3))),
        ("APP005", "STU005", "Karan Mehta", "CMP004", "Larsen & Toubro", "Graduate Engineer Trainee", "Rejected", (2024, 8, 1), Some((2024, 8, 21))),
        ("APP006", "STU004", "Sneha Iyer", "CMP004", "Larsen & Toubro", "Graduate Engineer Trainee", "Applied", (2024, 8, 5), None),
    ];

    rows.into_iter()
        .map(|(id, student_id, student_name, company_id, company_name, position, status, applied, interview)| {
            let record = ZiRecord::default()
                .with_field("id", id)
                .with_field("studentId", student_id)
                .with_field("studentName", student_name)
                .with_field("companyId", company_id)
                .with_field("companyName", company_name)
                .with_field("position", position)
                .with_field("status", status)
                .with_field("appliedDate", ZiValue::date(applied.0, applied.1, applied.2));
            match interview {
                Some((y, m, d)) => record.with_field("interviewDate", ZiValue::date(y, m, d)),
                None => record,
            }
        })
        .collect()
}

pub fn training() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "TRN001",
            "title": "Data Structures Bootcamp",
            "instructor": "Dr. Rajesh Kumar",
            "category": "Technical",
            "duration": "4 weeks",
            "enrolled": 48,
            "capacity": 60,
            "status": "Ongoing"
        }))
        .with_field("startDate", ZiValue::date(2024, 7, 1)),
        ZiRecord::from_json(json!({
            "id": "TRN002",
            "title": "Aptitude & Reasoning",
            "instructor": "Prof. Suresh Nair",
            "category": "Aptitude",
            "duration": "3 weeks",
            "enrolled": 120,
            "capacity": 120,
            "status": "Completed"
        }))
        .with_field("startDate", ZiValue::date(2024, 6, 10)),
        ZiRecord::from_json(json!({
            "id": "TRN003",
            "title": "Embedded Systems Workshop",
            "instructor": "Dr. Anita Desai",
            "category": "Technical",
            "duration": "2 weeks",
            "enrolled": 32,
            "capacity": 40,
            "status": "Upcoming"
        }))
        .with_field("startDate", ZiValue::date(2024, 11, 4)),
        ZiRecord::from_json(json!({
            "id": "TRN004",
            "title": "Cloud Fundamentals",
            "instructor": "Dr. Rajesh Kumar",
            "category": "Technical",
            "duration": "6 weeks",
            "enrolled": 55,
            "capacity": 80,
            "status": "Upcoming"
        }))
        .with_field("startDate", ZiValue::date(2024, 12, 2)),
    ]
}

pub fn faculty() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "FAC001",
            "name": "Dr. Rajesh Kumar",
            "email": "rajesh.kumar@university.edu",
            "department": "Computer Science",
            "designation": "Professor",
            "specialization": ["Algorithms", "Distributed Systems"],
            "experience": 18,
            "studentsMentored": 42
        })),
        ZiRecord::from_json(json!({
            "id": "FAC002",
            "name": "Dr. Anita Desai",
            "email": "anita.desai@university.edu",
            "department": "Electronics",
            "designation": "Associate Professor",
            "specialization": ["VLSI Design"],
            "experience": 12,
            "studentsMentored": 27
        })),
        ZiRecord::from_json(json!({
            "id": "FAC003",
            "name": "Prof. Suresh Nair",
            "email": "suresh.nair@university.edu",
            "department": "Mechanical",
            "designation": "Assistant Professor",
            "specialization": ["Thermodynamics", "Aptitude Training"],
            "experience": 9,
            "studentsMentored": 19
        })),
    ]
}

pub fn operations() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "OPS001",
            "title": "Quarterly Placement Summary",
            "category": "Placement",
            "period": "Q3 2024",
            "owner": "Placement Cell",
            "status": "Published",
            "metrics": {"placementRate": 78.5, "averagePackage": 7.2}
        }))
        .with_field("generatedOn", ZiValue::date(2024, 10, 1)),
        ZiRecord::from_json(json!({
            "id": "OPS002",
            "title": "Training Utilisation Report",
            "category": "Training",
            "period": "Q3 2024",
            "owner": "Training Office",
            "status": "Draft",
            "metrics": {"placementRate": 0, "averagePackage": 0}
        }))
        .with_field("generatedOn", ZiValue::date(2024, 10, 5)),
        ZiRecord::from_json(json!({
            "id": "OPS003",
            "title": "Recruiter Engagement Review",
            "category": "Outreach",
            "period": "H1 2024",
            "owner": "Corporate Relations",
            "status": "Published",
            "metrics": {"placementRate": 71.0, "averagePackage": 6.8}
        }))
        .with_field("generatedOn", ZiValue::date(2024, 7, 15)),
    ]
}

pub fn budget() -> ZiRecordBatch {
    vec![
        ZiRecord::from_json(json!({
            "id": "BUD001",
            "category": "Training",
            "description": "External trainers, ₹ per session",
            "allocated": 500000,
            "spent": 320000,
            "remaining": 180000,
            "fiscalYear": "2024-25",
            "approvedBy": "Dean of Academics"
        })),
        ZiRecord::from_json(json!({
            "id": "BUD002",
            "category": "Events",
            "description": "Placement drive logistics",
            "allocated": 250000,
            "spent": 198500,
            "remaining": 51500,
            "fiscalYear": "2024-25",
            "approvedBy": "Registrar"
        })),
        ZiRecord::from_json(json!({
            "id": "BUD003",
            "category": "Infrastructure",
            "description": "Interview rooms, video conferencing",
            "allocated": 750000,
            "spent": 410000,
            "remaining": 340000,
            "fiscalYear": "2024-25",
            "approvedBy": "Finance Committee"
        })),
        ZiRecord::from_json(json!({
            "id": "BUD004",
            "category": "Outreach",
            "description": "Recruiter hospitality",
            "allocated": 150000,
            "spent": 45000,
            "remaining": 105000,
            "fiscalYear": "2024-25",
            "approvedBy": "Registrar"
        })),
    ]
}

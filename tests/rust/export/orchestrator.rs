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

//! # Zi Portal Export Tests - Orchestrator
//!
//! End-to-end tests of the export pipeline: role scoping, predicate
//! filtering, serialization, file naming, delivery and notifications.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test orchestrator
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use ziportal::sample;
use async_trait::async_trait;
use ziportal::{
    ZiConstraint, ZiConstraintSet, ZiDatasetStore, ZiDelivery, ZiError, ZiExportRequest,
    ZiExporter, ZiFileDelivery, ZiLogicalType, ZiMemoryDelivery, ZiNotificationLog,
    ZiPortalConfig, ZiPrincipal, ZiRecord, ZiRole, ZiSeverity, NO_DATA_MESSAGE,
    NO_MATCH_MESSAGE, UTF8_BOM,
};

/// Delivery that always refuses the file.
struct FailingDelivery;

#[async_trait]
impl ZiDelivery for FailingDelivery {
    async fn deliver(&self, file_name: &str, _bytes: &[u8]) -> ziportal::Result<()> {
        Err(ZiError::delivery(file_name, "download blocked"))
    }
}

struct Harness {
    exporter: ZiExporter,
    delivery: Arc<ZiMemoryDelivery>,
    notices: Arc<ZiNotificationLog>,
}

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
}

fn harness(store: ZiDatasetStore) -> Harness {
    let delivery = Arc::new(ZiMemoryDelivery::new());
    let notices = Arc::new(ZiNotificationLog::new());
    let exporter = ZiExporter::new(Arc::new(store), delivery.clone(), notices.clone())
        .with_config(ZiPortalConfig::new().export_date(export_date()));
    Harness {
        exporter,
        delivery,
        notices,
    }
}

fn parse_csv(text: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect()
}

/// Admin export of five students yields six lines with the expected header and email.
#[tokio::test]
async fn test_students_export_as_admin() {
    let h = harness(ZiDatasetStore::sample());

    assert!(h.exporter.export_students(&ZiPrincipal::new(ZiRole::Admin), None).await);

    let files = h.delivery.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "students_2024-10-01.csv");

    let text = files[0].text();
    assert_eq!(text.lines().count(), 6);
    assert!(text.starts_with(r#""Student ID","Full Name","Email Address","#));

    let rows = parse_csv(&text);
    assert_eq!(rows[1][2], "aarav.sharma@university.edu");

    let notice = h.notices.last().unwrap();
    assert_eq!(notice.severity, ZiSeverity::Success);
    assert!(notice.message.contains("5 records"));
}

/// A student only sees their own application.
#[tokio::test]
async fn test_applications_export_as_student() {
    let applications = vec![
        ZiRecord::from_json(json!({"id": "APP1", "studentId": "STU001", "companyName": "Infosys"})),
        ZiRecord::from_json(json!({"id": "APP2", "studentId": "STU002", "companyName": "TCS"})),
    ];
    let store = ZiDatasetStore::builder()
        .with_dataset(ZiLogicalType::Applications, applications)
        .build();
    let h = harness(store);

    assert!(h.exporter.export_applications(&ZiPrincipal::student("STU001"), None).await);

    let text = h.delivery.files()[0].text();
    assert_eq!(text.lines().count(), 2);
    let rows = parse_csv(&text);
    assert_eq!(rows[1][0], "APP1");
    assert_eq!(rows[1][1], "STU001");
}

/// An unknown logical type fails without triggering a download.
#[tokio::test]
async fn test_unknown_logical_type_fails_without_delivery() {
    let h = harness(ZiDatasetStore::sample());
    let request = ZiExportRequest::new("payroll", ZiPrincipal::new(ZiRole::Admin));

    assert!(!h.exporter.export(&request).await);
    assert!(h.delivery.is_empty());
    assert_eq!(h.notices.last().unwrap().severity, ZiSeverity::Error);

    let err = h.exporter.try_export(&request).await.unwrap_err();
    assert!(matches!(err, ZiError::UnknownLogicalType(name) if name == "payroll"));
}

/// A cgpa range of 8.0 to 9.0 keeps exactly three of the five students.
#[tokio::test]
async fn test_numeric_range_predicate() {
    let h = harness(ZiDatasetStore::sample());
    let constraints = ZiConstraintSet::new().with("cgpa", ZiConstraint::between(8.0, 9.0));

    assert!(
        h.exporter
            .export_students(&ZiPrincipal::new(ZiRole::Admin), Some(constraints))
            .await
    );

    let rows = parse_csv(&h.delivery.files()[0].text());
    let cgpas: Vec<&str> = rows[1..].iter().map(|row| row[6].as_str()).collect();
    assert_eq!(cgpas, vec!["8.95", "8.67", "8.45"]);
}

/// A role with no visible records reports "no data" and delivers nothing.
#[tokio::test]
async fn test_no_data_for_role_is_reported() {
    let h = harness(ZiDatasetStore::sample());

    assert!(!h.exporter.export_budget(&ZiPrincipal::student("STU001"), None).await);
    assert!(h.delivery.is_empty());

    let notice = h.notices.last().unwrap();
    assert_eq!(notice.message, NO_DATA_MESSAGE);
    assert_eq!(notice.severity, ZiSeverity::Warning);
}

/// Constraints removing every record report "no match" rather than a header-only file.
#[tokio::test]
async fn test_no_data_after_filter_is_reported() {
    let h = harness(ZiDatasetStore::sample());
    let constraints = ZiConstraintSet::new().with("cgpa", ZiConstraint::between(9.5, 10.0));

    assert!(
        !h.exporter
            .export_students(&ZiPrincipal::new(ZiRole::Operations), Some(constraints.clone()))
            .await
    );
    assert!(h.delivery.is_empty());
    assert_eq!(h.notices.last().unwrap().message, NO_MATCH_MESSAGE);

    let request = ZiExportRequest::new("students", ZiPrincipal::new(ZiRole::Operations))
        .with_constraints(constraints);
    let err = h.exporter.try_export(&request).await.unwrap_err();
    assert!(matches!(err, ZiError::NoDataAfterFilter { .. }));
}

/// An unrecognised role sees nothing for any type.
#[tokio::test]
async fn test_unknown_role_exports_nothing() {
    let h = harness(ZiDatasetStore::sample());
    let principal = ZiPrincipal::from_role_name("guest");

    for (_, ok) in h.exporter.export_all(&principal).await {
        assert!(!ok);
    }
    assert!(h.delivery.is_empty());
}

/// Admin export of every type succeeds and delivers one file per type.
#[tokio::test]
async fn test_export_all_as_admin() {
    let h = harness(ZiDatasetStore::sample());

    let outcomes = h.exporter.export_all(&ZiPrincipal::new(ZiRole::Admin)).await;
    assert_eq!(outcomes.len(), 7);
    assert!(outcomes.iter().all(|(_, ok)| *ok));

    let mut names: Vec<String> = h.delivery.files().into_iter().map(|f| f.file_name).collect();
    names.sort();
    assert_eq!(names[0], "applications_2024-10-01.csv");
    assert_eq!(names.len(), 7);
}

/// Output bytes start with a byte-order mark and the receipt hashes them.
#[tokio::test]
async fn test_receipt_describes_delivered_bytes() {
    let h = harness(ZiDatasetStore::sample());
    let request = ZiExportRequest::new("budget", ZiPrincipal::new(ZiRole::Operations))
        .with_filename_stem("finance");

    let receipt = h.exporter.try_export(&request).await.unwrap();
    let files = h.delivery.files();
    let file = &files[0];

    assert_eq!(&file.bytes[..3], &UTF8_BOM);
    assert_eq!(receipt.file_name, "finance_2024-10-01.csv");
    assert_eq!(receipt.records_exported, sample::budget().len());
    assert_eq!(receipt.bytes_written, file.bytes.len());
    assert_eq!(receipt.content_hash, blake3::hash(&file.bytes).to_hex().to_string());
    assert!(file.text().contains("Allocated (₹)"));
}

/// Configured stems and the BOM toggle apply to the convenience wrappers.
#[tokio::test]
async fn test_config_stem_and_bom_toggle() {
    let delivery = Arc::new(ZiMemoryDelivery::new());
    let config = ZiPortalConfig::new()
        .export_date(export_date())
        .include_bom(false)
        .filename_stem(ZiLogicalType::Companies, "recruiters");
    let exporter = ZiExporter::new(
        Arc::new(ZiDatasetStore::sample()),
        delivery.clone(),
        Arc::new(ZiNotificationLog::new()),
    )
    .with_config(config);

    assert!(exporter.export_companies(&ZiPrincipal::new(ZiRole::Outreach), None).await);

    let files = delivery.files();
    let file = &files[0];
    assert_eq!(file.file_name, "recruiters_2024-10-01.csv");
    assert_eq!(file.bytes[0], b'"');
}

/// File delivery writes the export into the configured directory.
#[tokio::test]
async fn test_file_delivery_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = ZiPortalConfig::new()
        .output_dir(dir.path())
        .export_date(export_date());
    let exporter = ZiExporter::new(
        Arc::new(ZiDatasetStore::sample()),
        Arc::new(ZiFileDelivery::from_config(&config)),
        Arc::new(ZiNotificationLog::new()),
    )
    .with_config(config);

    let instructor = ZiPrincipal::faculty("Dr. Rajesh Kumar", "Computer Science");
    assert!(exporter.export_training(&instructor, None).await);

    let bytes = std::fs::read(dir.path().join("training_2024-10-01.csv")).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("Data Structures Bootcamp"));
    assert!(text.contains("Cloud Fundamentals"));
}

/// Rapid repeated exports are independent and each delivers a file.
#[tokio::test]
async fn test_repeated_exports_are_not_deduplicated() {
    let h = harness(ZiDatasetStore::sample());
    let admin = ZiPrincipal::new(ZiRole::Admin);

    let (first, second) = tokio::join!(
        h.exporter.export_faculty(&admin, None),
        h.exporter.export_faculty(&admin, None)
    );
    assert!(first && second);
    assert_eq!(h.delivery.len(), 2);
}

/// A delivery failure is caught at the boundary and reported as an error notice.
#[tokio::test]
async fn test_delivery_failure_is_reported() {
    let notices = Arc::new(ZiNotificationLog::new());
    let exporter = ZiExporter::new(
        Arc::new(ZiDatasetStore::sample()),
        Arc::new(FailingDelivery),
        notices.clone(),
    )
    .with_config(ZiPortalConfig::new().export_date(export_date()));

    assert!(!exporter.export_companies(&ZiPrincipal::new(ZiRole::Admin), None).await);

    let notice = notices.last().unwrap();
    assert_eq!(notice.severity, ZiSeverity::Error);
    assert!(notice.message.contains("download blocked"), "{}", notice.message);

    let request = ZiExportRequest::new("companies", ZiPrincipal::new(ZiRole::Admin));
    let err = exporter.try_export(&request).await.unwrap_err();
    assert!(matches!(err, ZiError::Delivery { file_name, .. } if file_name == "companies_2024-10-01.csv"));
}

/// A failed rename into the output directory leaves no temp file behind.
#[tokio::test]
async fn test_failed_file_delivery_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("faculty_2024-10-01.csv");
    std::fs::create_dir(&blocked).unwrap();
    std::fs::write(blocked.join("occupied"), b"x").unwrap();

    let notices = Arc::new(ZiNotificationLog::new());
    let config = ZiPortalConfig::new()
        .output_dir(dir.path())
        .export_date(export_date());
    let exporter = ZiExporter::new(
        Arc::new(ZiDatasetStore::sample()),
        Arc::new(ZiFileDelivery::from_config(&config)),
        notices.clone(),
    )
    .with_config(config);

    assert!(!exporter.export_faculty(&ZiPrincipal::new(ZiRole::Admin), None).await);
    assert_eq!(notices.last().unwrap().severity, ZiSeverity::Error);
    assert!(!dir.path().join(".faculty_2024-10-01.csv.tmp").exists());
    assert!(blocked.is_dir());
}

/// A student exports their own record through `profile` and nothing through `students`.
#[tokio::test]
async fn test_student_profile_export() {
    let h = harness(ZiDatasetStore::sample());
    let student = ZiPrincipal::student("STU002");

    assert!(!h.exporter.export_students(&student, None).await);
    assert_eq!(h.notices.last().unwrap().message, NO_DATA_MESSAGE);
    assert!(h.delivery.is_empty());

    assert!(h.exporter.export_profile(&student).await);
    let files = h.delivery.files();
    assert_eq!(files[0].file_name, "profile_2024-10-01.csv");

    let rows = parse_csv(&files[0].text());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Student ID");
    assert_eq!(rows[1][0], "STU002");
}

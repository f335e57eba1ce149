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

//! # Zi Portal Core Tests - Access
//!
//! Tests for role scoping: which slice of each dataset a principal may export.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test access
//! ```

use ziportal::{
    ZiDataProvider, ZiDatasetStore, ZiLogicalType, ZiPrincipal, ZiRecord, ZiRole, ZiRoleFilter,
};

fn ids(batch: &[ZiRecord]) -> Vec<&str> {
    batch.iter().filter_map(|record| record.text("id")).collect()
}

fn scope(principal: &ZiPrincipal, logical_type: ZiLogicalType) -> Vec<ZiRecord> {
    ZiRoleFilter::standard().apply(principal, logical_type, &ZiDatasetStore::sample())
}

/// Operations and admin see every dataset unchanged.
#[test]
fn test_privileged_roles_see_full_datasets() {
    let store = ZiDatasetStore::sample();
    let filter = ZiRoleFilter::standard();

    for role in [ZiRole::Operations, ZiRole::Admin] {
        for logical_type in ZiLogicalType::ALL {
            let slice = filter.apply(&ZiPrincipal::new(role), logical_type, &store);
            assert_eq!(slice.as_slice(), store.dataset(logical_type), "{role} / {logical_type}");
        }
    }
}

/// A student sees their own record through `profile` and nothing through `students`.
#[test]
fn test_student_sees_own_profile_only() {
    let principal = ZiPrincipal::student("STU003");

    let profile = ZiLogicalType::from_name("profile").unwrap();
    assert_eq!(profile, ZiLogicalType::Profile);
    assert_eq!(ids(&scope(&principal, profile)), vec!["STU003"]);
    assert!(scope(&principal, ZiLogicalType::Students).is_empty());
}

/// Privileged roles read the whole students dataset through `profile` as well.
#[test]
fn test_profile_reads_students_dataset() {
    let slice = scope(&ZiPrincipal::new(ZiRole::Admin), ZiLogicalType::Profile);
    assert_eq!(slice, ziportal::sample::students());
}

/// A student sees only their own applications.
#[test]
fn test_student_sees_own_applications() {
    let slice = scope(&ZiPrincipal::student("STU001"), ZiLogicalType::Applications);
    assert_eq!(ids(&slice), vec!["APP001", "APP003"]);
}

/// Students may browse the whole training catalog but nothing administrative.
#[test]
fn test_student_visibility_outside_own_records() {
    let principal = ZiPrincipal::student("STU001");
    assert_eq!(scope(&principal, ZiLogicalType::Training).len(), 4);

    for logical_type in [
        ZiLogicalType::Students,
        ZiLogicalType::Companies,
        ZiLogicalType::Faculty,
        ZiLogicalType::Operations,
        ZiLogicalType::Budget,
    ] {
        assert!(scope(&principal, logical_type).is_empty(), "{logical_type}");
    }
}

/// Faculty see students and applications of their own department.
#[test]
fn test_faculty_department_scope() {
    let principal = ZiPrincipal::faculty("Dr. Anita Desai", "Electronics");

    assert_eq!(ids(&scope(&principal, ZiLogicalType::Students)), vec!["STU003"]);
    assert_eq!(ids(&scope(&principal, ZiLogicalType::Applications)), vec!["APP004"]);
}

/// Faculty see the training programs they instruct.
#[test]
fn test_faculty_sees_instructed_programs() {
    let principal = ZiPrincipal::faculty("Dr. Rajesh Kumar", "Computer Science");
    assert_eq!(ids(&scope(&principal, ZiLogicalType::Training)), vec!["TRN001", "TRN004"]);
    assert_eq!(scope(&principal, ZiLogicalType::Companies).len(), 4);
}

/// Faculty without a department see no students.
#[test]
fn test_faculty_without_department_sees_no_students() {
    let principal = ZiPrincipal::new(ZiRole::Faculty);
    assert!(scope(&principal, ZiLogicalType::Students).is_empty());
    assert!(scope(&principal, ZiLogicalType::Applications).is_empty());
}

/// Outreach sees only students registered for placement.
#[test]
fn test_outreach_sees_registered_students() {
    let principal = ZiPrincipal::new(ZiRole::Outreach);
    let slice = scope(&principal, ZiLogicalType::Students);
    assert_eq!(ids(&slice), vec!["STU001", "STU002", "STU003", "STU005"]);
    assert_eq!(scope(&principal, ZiLogicalType::Companies).len(), 4);
}

/// An unrecognised role sees nothing at all.
#[test]
fn test_unknown_role_sees_nothing() {
    let principal = ZiPrincipal::from_role_name("visitor");
    assert_eq!(principal.role_name(), "unknown");

    for logical_type in ZiLogicalType::ALL {
        assert!(scope(&principal, logical_type).is_empty());
    }
}

/// Role names parse case-insensitively.
#[test]
fn test_role_names_parse() {
    for role in ZiRole::ALL {
        assert_eq!(ZiRole::from_name(&role.name().to_uppercase()), Some(role));
    }
    assert_eq!(ZiPrincipal::from_role_name("Admin").role, Some(ZiRole::Admin));
}

/// Scoping never mutates the provider's datasets.
#[test]
fn test_scoping_leaves_provider_untouched() {
    let store = ZiDatasetStore::sample();
    let before = store.dataset(ZiLogicalType::Students).to_vec();

    let _ = ZiRoleFilter::standard().apply(
        &ZiPrincipal::student("STU001"),
        ZiLogicalType::Students,
        &store,
    );

    assert_eq!(store.dataset(ZiLogicalType::Students), before.as_slice());
}

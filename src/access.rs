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

//! # Access Module
//!
//! Roles, principals and the role filter deciding which slice of a dataset a
//! caller may export.
//!
//! The role filter is a flat table from `(role, logical type)` to a pure rule
//! function. There is no inheritance between roles: each pair carries its own
//! rule, and a pair without an entry sees nothing.
//!
//! | role        | profile / students   | applications            | training            | others |
//! |-------------|----------------------|-------------------------|---------------------|--------|
//! | student     | own record / empty   | own applications        | full catalog        | empty  |
//! | faculty     | own department       | own department students | programs they teach | raw    |
//! | outreach    | placement registered | all                     | raw                 | raw    |
//! | operations  | raw                  | raw                     | raw                 | raw    |
//! | admin       | raw                  | raw                     | raw                 | raw    |

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{ZiDataProvider, ZiLogicalType};
use crate::record::{ZiRecord, ZiRecordBatch};

/// Access-scope tag of the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiRole {
    Student,
    Faculty,
    Outreach,
    Operations,
    Admin,
}

impl ZiRole {
    pub const ALL: [ZiRole; 5] = [
        ZiRole::Student,
        ZiRole::Faculty,
        ZiRole::Outreach,
        ZiRole::Operations,
        ZiRole::Admin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ZiRole::Student => "student",
            ZiRole::Faculty => "faculty",
            ZiRole::Outreach => "outreach",
            ZiRole::Operations => "operations",
            ZiRole::Admin => "admin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "student" => Some(ZiRole::Student),
            "faculty" => Some(ZiRole::Faculty),
            "outreach" => Some(ZiRole::Outreach),
            "operations" => Some(ZiRole::Operations),
            "admin" => Some(ZiRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for ZiRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The caller of an export: a role plus the identity attributes rules need.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiPrincipal {
    /// `None` when the role name was not recognised.
    pub role: Option<ZiRole>,
    pub student_id: Option<String>,
    pub department: Option<String>,
    pub name: Option<String>,
}

impl ZiPrincipal {
    #[allow(non_snake_case)]
    pub fn new(role: ZiRole) -> Self {
        Self {
            role: Some(role),
            ..Default::default()
        }
    }

    /// Principal for a role given by name; unknown names keep `role` empty.
    pub fn from_role_name(name: &str) -> Self {
        Self {
            role: ZiRole::from_name(name),
            ..Default::default()
        }
    }

    pub fn student(student_id: impl Into<String>) -> Self {
        Self::new(ZiRole::Student).with_student_id(student_id)
    }

    pub fn faculty(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self::new(ZiRole::Faculty)
            .with_name(name)
            .with_department(department)
    }

    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Role name for messages; `unknown` when unrecognised.
    pub fn role_name(&self) -> &'static str {
        self.role.map(|role| role.name()).unwrap_or("unknown")
    }
}

/// Inputs available to a scope rule.
pub struct ZiScopeContext<'a> {
    pub principal: &'a ZiPrincipal,
    pub logical_type: ZiLogicalType,
    pub provider: &'a dyn ZiDataProvider,
}

impl<'a> ZiScopeContext<'a> {
    fn records(&self) -> &'a [ZiRecord] {
        self.provider.dataset(self.logical_type.source())
    }
}

/// A pure function computing the visible slice for one `(role, type)` pair.
pub type ZiScopeRule = fn(&ZiScopeContext<'_>) -> ZiRecordBatch;

/// Table-driven role filter.
#[derive(Clone, Default)]
pub struct ZiRoleFilter {
    rules: HashMap<(ZiRole, ZiLogicalType), ZiScopeRule>,
}

impl fmt::Debug for ZiRoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZiRoleFilter")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl ZiRoleFilter {
    /// Empty table: every pair sees nothing until a rule is added.
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// The portal's standard visibility table.
    pub fn standard() -> Self {
        use ZiLogicalType::*;

        let mut filter = Self::new()
            .with_rule(ZiRole::Student, Profile, own_profile)
            .with_rule(ZiRole::Student, Applications, own_applications)
            .with_rule(ZiRole::Student, Training, everything);

        for logical_type in ZiLogicalType::ALL.into_iter().chain([Profile]) {
            let faculty_rule: ZiScopeRule = match logical_type {
                Students | Profile => department_students,
                Applications => department_applications,
                Training => instructed_programs,
                _ => everything,
            };
            let outreach_rule: ZiScopeRule = match logical_type {
                Students | Profile => placement_registered,
                _ => everything,
            };
            filter = filter
                .with_rule(ZiRole::Faculty, logical_type, faculty_rule)
                .with_rule(ZiRole::Outreach, logical_type, outreach_rule)
                .with_rule(ZiRole::Operations, logical_type, everything)
                .with_rule(ZiRole::Admin, logical_type, everything);
        }

        filter
    }

    /// Adds or replaces the rule for a pair.
    pub fn with_rule(mut self, role: ZiRole, logical_type: ZiLogicalType, rule: ZiScopeRule) -> Self {
        self.rules.insert((role, logical_type), rule);
        self
    }

    pub fn has_rule(&self, role: ZiRole, logical_type: ZiLogicalType) -> bool {
        self.rules.contains_key(&(role, logical_type))
    }

    /// Returns the records of `logical_type` visible to `principal`.
    pub fn apply(
        &self,
        principal: &ZiPrincipal,
        logical_type: ZiLogicalType,
        provider: &dyn ZiDataProvider,
    ) -> ZiRecordBatch {
        let Some(role) = principal.role else {
            return Vec::new();
        };
        let Some(rule) = self.rules.get(&(role, logical_type)) else {
            return Vec::new();
        };
        rule(&ZiScopeContext {
            principal,
            logical_type,
            provider,
        })
    }
}

fn matching(records: &[ZiRecord], key: &str, expected: Option<&str>) -> ZiRecordBatch {
    let Some(expected) = expected else {
        return Vec::new();
    };
    records
        .iter()
        .filter(|record| record.text(key) == Some(expected))
        .cloned()
        .collect()
}

fn everything(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    ctx.records().to_vec()
}

fn own_profile(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    matching(ctx.records(), "id", ctx.principal.student_id.as_deref())
}

fn own_applications(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    matching(ctx.records(), "studentId", ctx.principal.student_id.as_deref())
}

fn department_students(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    matching(ctx.records(), "department", ctx.principal.department.as_deref())
}

// Applications carry no department; join through the students dataset.
fn department_applications(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    let Some(department) = ctx.principal.department.as_deref() else {
        return Vec::new();
    };
    let students: HashSet<&str> = ctx
        .provider
        .dataset(ZiLogicalType::Students)
        .iter()
        .filter(|student| student.text("department") == Some(department))
        .filter_map(|student| student.text("id"))
        .collect();

    ctx.records()
        .iter()
        .filter(|application| {
            application
                .text("studentId")
                .map_or(false, |id| students.contains(id))
        })
        .cloned()
        .collect()
}

fn instructed_programs(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    matching(ctx.records(), "instructor", ctx.principal.name.as_deref())
}

fn placement_registered(ctx: &ZiScopeContext<'_>) -> ZiRecordBatch {
    ctx.records()
        .iter()
        .filter(|student| {
            student
                .get("placementRegistered")
                .value()
                .and_then(|value| value.as_bool())
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

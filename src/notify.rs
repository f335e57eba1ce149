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

//! Toast-style notification channel for export outcomes.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl ZiSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiSeverity::Success => "SUCCESS",
            ZiSeverity::Info => "INFO",
            ZiSeverity::Warning => "WARNING",
            ZiSeverity::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiNotification {
    pub message: String,
    pub severity: ZiSeverity,
}

/// Receiver of user-facing messages.
pub trait ZiNotifier: Send + Sync {
    fn notify(&self, message: &str, severity: ZiSeverity);
}

/// Forwards notifications to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiLogNotifier;

impl ZiNotifier for ZiLogNotifier {
    fn notify(&self, message: &str, severity: ZiSeverity) {
        match severity {
            ZiSeverity::Error => log::error!("{}", message),
            ZiSeverity::Warning => log::warn!("{}", message),
            ZiSeverity::Success | ZiSeverity::Info => log::info!("[{}] {}", severity.as_str(), message),
        }
    }
}

/// Collects notifications in memory.
#[derive(Debug, Default)]
pub struct ZiNotificationLog {
    entries: Mutex<Vec<ZiNotification>>,
}

impl ZiNotificationLog {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ZiNotification> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<ZiNotification> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }
}

impl ZiNotifier for ZiNotificationLog {
    fn notify(&self, message: &str, severity: ZiSeverity) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(ZiNotification {
                message: message.to_string(),
                severity,
            });
        }
    }
}

//! Application settings model.
//!
//! # Responsibility
//! - Define the singleton settings record and its partial-update shape.
//!
//! # Invariants
//! - Both fields are always populated; defaults apply at first
//!   initialization only, never on partial update.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub user_name: String,
    /// `HH:mm` default for future reminder scheduling.
    pub default_reminder_time: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            user_name: "Salesperson".to_string(),
            default_reminder_time: "09:00".to_string(),
        }
    }
}

/// Partial update: only `Some` fields change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    pub user_name: Option<String>,
    pub default_reminder_time: Option<String>,
}

impl AppSettings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(default_reminder_time) = patch.default_reminder_time {
            self.default_reminder_time = default_reminder_time;
        }
    }
}

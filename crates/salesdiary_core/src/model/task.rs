//! Task domain model.
//!
//! # Responsibility
//! - Define the to-do task record and the draft shape used by add-task.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes.
//! - `date_time` is a local `YYYY-MM-DDTHH:mm` timestamp; triage compares
//!   its date part lexicographically against the current day.

use super::{is_local_date_time, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Persisted to-do task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub task_title: String,
    pub description: String,
    /// Local `YYYY-MM-DDTHH:mm` scheduled timestamp.
    pub date_time: String,
    pub priority: TaskPriority,
    pub is_complete: bool,
    pub set_reminder: bool,
}

impl Task {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.task_title, &self.date_time)
    }

    /// Date part of the scheduled timestamp (`YYYY-MM-DD`).
    pub fn scheduled_date(&self) -> &str {
        self.date_time.get(..10).unwrap_or(&self.date_time)
    }
}

/// Input shape for add-task; the store assigns `id` and starts the task
/// incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub task_title: String,
    pub description: String,
    pub date_time: String,
    pub priority: TaskPriority,
    pub set_reminder: bool,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.task_title, &self.date_time)
    }
}

fn validate_fields(title: &str, date_time: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTaskTitle);
    }
    // Triage has no place for a task without a scheduled timestamp.
    if !is_local_date_time(date_time) {
        return Err(ValidationError::InvalidTaskDateTime(date_time.to_string()));
    }
    Ok(())
}

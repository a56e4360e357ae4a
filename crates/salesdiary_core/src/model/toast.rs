//! Ephemeral toast notifications.
//!
//! # Responsibility
//! - Define the short-lived feedback record queued by the store.
//!
//! # Invariants
//! - Toasts are never persisted.
//! - `id` is monotonic within a store instance.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Display for ToastKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id sourced from the creation-time epoch-ms timestamp.
    pub id: i64,
    pub message: String,
    pub kind: ToastKind,
}

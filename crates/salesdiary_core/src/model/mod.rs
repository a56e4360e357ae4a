//! Domain model for the sales diary.
//!
//! # Responsibility
//! - Define the persisted record shapes shared by store, queries and export.
//! - Enforce field-level validation before any mutation is attempted.
//!
//! # Invariants
//! - Serialized field names match the on-device JSON written by earlier
//!   releases (camelCase), so existing stored data loads unchanged.
//! - Calendar fields are zero-padded (`YYYY-MM-DD`, `HH:mm`,
//!   `YYYY-MM-DDTHH:mm`); this is what makes lexicographic date ordering
//!   valid everywhere else in the crate.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer;
pub mod settings;
pub mod task;
pub mod toast;
pub mod visit;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern must compile"));
static HOUR_MINUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("static time pattern must compile"));
static LOCAL_DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2})?$")
        .expect("static datetime pattern must compile")
});

pub(crate) fn is_iso_date(value: &str) -> bool {
    ISO_DATE.is_match(value)
}

pub(crate) fn is_hour_minute(value: &str) -> bool {
    HOUR_MINUTE.is_match(value)
}

pub(crate) fn is_local_date_time(value: &str) -> bool {
    LOCAL_DATE_TIME.is_match(value)
}

/// Field-level validation failure; the offending mutation is never applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCustomerName,
    MissingMobileNumber,
    InvalidVisitDate(String),
    InvalidVisitTime(String),
    MissingTaskTitle,
    InvalidTaskDateTime(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCustomerName => write!(f, "customer name is required"),
            Self::MissingMobileNumber => write!(f, "mobile number is required"),
            Self::InvalidVisitDate(value) => {
                write!(f, "next visit date `{value}` is not a YYYY-MM-DD date")
            }
            Self::InvalidVisitTime(value) => {
                write!(f, "next visit time `{value}` is not an HH:mm time")
            }
            Self::MissingTaskTitle => write!(f, "task title is required"),
            Self::InvalidTaskDateTime(value) => {
                write!(f, "task date `{value}` is not a YYYY-MM-DDTHH:mm timestamp")
            }
        }
    }
}

impl Error for ValidationError {}

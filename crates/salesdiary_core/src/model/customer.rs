//! Customer domain model.
//!
//! # Responsibility
//! - Define the customer record and the draft shape used by add-customer.
//! - Validate required fields and calendar formats before mutation.
//!
//! # Invariants
//! - `id` and `created_at` are assigned by the store and never change.
//! - `next_visit_date`/`next_visit_time` are empty or zero-padded; an
//!   empty time means "anytime".

use super::{is_hour_minute, is_iso_date, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Relationship classification: existing-to-business or new-to-business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerType {
    Etb,
    Ntb,
}

impl CustomerType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Etb => "ETB",
            Self::Ntb => "NTB",
        }
    }
}

impl Display for CustomerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for CustomerType {
    fn default() -> Self {
        Self::Etb
    }
}

/// Persisted customer record.
///
/// Field declaration order is the header order of CSV exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub customer_name: String,
    pub mobile_number: String,
    pub reference_by: String,
    /// Free text; matched against the product list at entry time only.
    pub product: String,
    pub customer_type: CustomerType,
    pub remark: String,
    /// `YYYY-MM-DD`, or empty when no visit is scheduled.
    pub next_visit_date: String,
    /// `HH:mm`, or empty meaning "anytime".
    pub next_visit_time: String,
    /// Local ISO timestamp assigned at creation; immutable.
    pub created_at: String,
}

impl Customer {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.customer_name,
            &self.mobile_number,
            &self.next_visit_date,
            &self.next_visit_time,
        )
    }
}

/// Input shape for add-customer; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerDraft {
    pub customer_name: String,
    pub mobile_number: String,
    pub reference_by: String,
    pub product: String,
    pub customer_type: CustomerType,
    pub remark: String,
    pub next_visit_date: String,
    pub next_visit_time: String,
}

impl CustomerDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.customer_name,
            &self.mobile_number,
            &self.next_visit_date,
            &self.next_visit_time,
        )
    }
}

fn validate_fields(
    name: &str,
    mobile: &str,
    visit_date: &str,
    visit_time: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingCustomerName);
    }
    if mobile.trim().is_empty() {
        return Err(ValidationError::MissingMobileNumber);
    }
    if !visit_date.is_empty() && !is_iso_date(visit_date) {
        return Err(ValidationError::InvalidVisitDate(visit_date.to_string()));
    }
    if !visit_time.is_empty() && !is_hour_minute(visit_time) {
        return Err(ValidationError::InvalidVisitTime(visit_time.to_string()));
    }
    Ok(())
}

//! Visit-history domain model.
//!
//! # Responsibility
//! - Define the append-only audit record written on every customer
//!   add/update.
//!
//! # Invariants
//! - Entries are never mutated or deleted individually; only the bulk
//!   wipe clears them.
//! - `customer_name`/`mobile_number` are snapshots taken at logging time,
//!   not live references; a dangling `customer_id` is tolerated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitHistory {
    pub id: String,
    pub customer_id: String,
    /// Local ISO timestamp of the logging event, not the scheduled visit.
    pub visit_date: String,
    pub remark: String,
    pub customer_name: String,
    pub mobile_number: String,
}

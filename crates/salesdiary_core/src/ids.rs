//! Entity id generation.
//!
//! # Responsibility
//! - Produce unique, prefixed ids for customers, tasks and visit-history
//!   entries.
//!
//! # Invariants
//! - Ids are unique within a collection and immutable once assigned.
//! - The `cust_`/`task_`/`vh_` prefixes match ids already stored on
//!   device, so old and new records read the same shape side by side.

use uuid::Uuid;

pub const CUSTOMER_ID_PREFIX: &str = "cust_";
pub const TASK_ID_PREFIX: &str = "task_";
pub const VISIT_ID_PREFIX: &str = "vh_";

/// Injectable id source; production code uses [`UuidIdGenerator`], tests
/// substitute a sequential implementation for exact assertions.
pub trait IdGenerator {
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Random v4 uuid ids.
///
/// Earlier releases derived ids from millisecond timestamps, which
/// collide under rapid successive calls; uuids close that gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        format!("{prefix}{}", Uuid::new_v4())
    }
}

//! Persistence layer: durable key-value contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed raw-text storage contract the store runs on.
//! - Isolate SQLite details from state orchestration.
//!
//! # Invariants
//! - Values are full JSON serializations of an entire collection; there is
//!   no delta format.
//! - Load/persist failures never propagate to store callers; they are
//!   logged and reported through explicit outcome values.

pub mod collections;
pub mod kv_repo;

//! Derived views over the store's collections.
//!
//! # Responsibility
//! - Compute the filtered, grouped and sorted sequences the screens
//!   render, on demand and without storing anything.
//!
//! # Invariants
//! - Query functions are pure: the current day is a parameter, never read
//!   from the wall clock here.
//! - Date and time ordering is lexicographic on zero-padded strings.

pub mod filter;
pub mod triage;
pub mod visits;

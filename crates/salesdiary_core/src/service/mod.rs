//! Core use-case services.
//!
//! # Responsibility
//! - Own the application state and orchestrate persistence, reminders and
//!   change notification behind one mutation API.
//! - Keep UI layers decoupled from storage details.

pub mod app_store;
pub mod reminder;

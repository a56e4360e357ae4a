//! Core domain logic for the sales diary.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod db;
pub mod export;
pub mod ids;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use export::{customers_csv_filename, full_export_csv_filename, to_csv_table, ExportError};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerDraft, CustomerType};
pub use model::settings::{AppSettings, SettingsPatch};
pub use model::task::{Task, TaskDraft, TaskPriority};
pub use model::toast::{Toast, ToastKind};
pub use model::visit::VisitHistory;
pub use model::ValidationError;
pub use query::filter::{filter_customers, CustomerFilter};
pub use query::triage::{triage_tasks, TaskTriage};
pub use query::visits::{
    format_visit_time, todays_visits, upcoming_visits, visits_on_date, UpcomingVisits,
};
pub use repo::collections::PersistOutcome;
pub use repo::kv_repo::{KeyValueRepository, RepoError, RepoResult, SqliteKeyValueRepository};
pub use service::app_store::{
    AppStore, StoreError, StoreEvent, StoreResult, SubscriptionId, TOAST_DISPLAY_MS,
};
pub use service::reminder::{LogReminderSink, ReminderIntent, ReminderSink};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

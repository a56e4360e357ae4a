//! Reminder intention hook.
//!
//! # Responsibility
//! - Describe "what to remind, for whom, when" to an external scheduler.
//!
//! # Invariants
//! - Producing an intent has no side effect beyond the sink; no real
//!   notification is delivered in current scope.

use log::info;

/// Description of a future notification to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderIntent {
    /// Who or what the reminder is about (customer name, task title).
    pub subject: String,
    /// `YYYY-MM-DD`, or empty when no date is scheduled.
    pub target_date: String,
    /// `HH:mm`, or empty meaning "anytime".
    pub target_time: String,
}

/// Integration point for a real notification scheduler.
pub trait ReminderSink {
    fn schedule(&self, intent: &ReminderIntent);
}

/// Default sink: records the intent as a diagnostic log event only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReminderSink;

impl ReminderSink for LogReminderSink {
    fn schedule(&self, intent: &ReminderIntent) {
        info!(
            "event=reminder_intent module=reminder status=ok subject=`{}` date={} time={}",
            intent.subject, intent.target_date, intent.target_time
        );
    }
}

//! Time source abstraction.
//!
//! # Responsibility
//! - Provide the device-local timestamps the store and queries stamp onto
//!   records.
//!
//! # Invariants
//! - `today()` is zero-padded `YYYY-MM-DD`; `now_iso()` is zero-padded
//!   `YYYY-MM-DDTHH:MM:SS`. Both therefore order lexicographically.

use chrono::Local;

/// Injectable time source; production code uses [`SystemClock`], tests
/// substitute a deterministic implementation.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_epoch_ms(&self) -> i64;

    /// Local wall-clock timestamp, `YYYY-MM-DDTHH:MM:SS`.
    fn now_iso(&self) -> String;

    /// Local calendar date, `YYYY-MM-DD`.
    fn today(&self) -> String {
        self.now_iso().chars().take(10).collect()
    }
}

/// Device-local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn now_iso(&self) -> String {
        Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    fn today(&self) -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }
}

/// Returns the calendar day after `date`, or `None` when `date` is not a
/// valid `YYYY-MM-DD` value.
pub fn next_day(date: &str) -> Option<String> {
    let parsed = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let next = parsed.succ_opt()?;
    Some(next.format("%Y-%m-%d").to_string())
}

#![allow(dead_code)]

//! Shared deterministic collaborators for store tests.

use rusqlite::Connection;
use salesdiary_core::{
    AppStore, Clock, CustomerDraft, CustomerType, IdGenerator, ReminderIntent, ReminderSink,
    SqliteKeyValueRepository, TaskDraft, TaskPriority,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const TEST_EPOCH_MS: i64 = 1_718_000_000_000;
pub const TEST_ISO: &str = "2024-06-10T12:00:00";
pub const TEST_TODAY: &str = "2024-06-10";

/// Clock with externally controlled time; cloning shares the same state.
#[derive(Clone)]
pub struct FixedClock {
    state: Rc<RefCell<FixedClockState>>,
}

struct FixedClockState {
    epoch_ms: i64,
    iso: String,
}

impl FixedClock {
    pub fn at(iso: &str, epoch_ms: i64) -> Self {
        Self {
            state: Rc::new(RefCell::new(FixedClockState {
                epoch_ms,
                iso: iso.to_string(),
            })),
        }
    }

    pub fn advance_ms(&self, delta: i64) {
        self.state.borrow_mut().epoch_ms += delta;
    }

    pub fn set_iso(&self, iso: &str) {
        self.state.borrow_mut().iso = iso.to_string();
    }
}

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.state.borrow().epoch_ms
    }

    fn now_iso(&self) -> String {
        self.state.borrow().iso.clone()
    }
}

/// Id generator producing `prefix1`, `prefix2`, ... in call order.
#[derive(Default)]
pub struct SeqIdGenerator {
    counter: u64,
}

impl IdGenerator for SeqIdGenerator {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}{}", self.counter)
    }
}

/// Sink capturing every reminder intent; cloning shares the same buffer.
#[derive(Clone, Default)]
pub struct RecordingReminderSink {
    intents: Rc<RefCell<Vec<ReminderIntent>>>,
}

impl RecordingReminderSink {
    pub fn intents(&self) -> Vec<ReminderIntent> {
        self.intents.borrow().clone()
    }
}

impl ReminderSink for RecordingReminderSink {
    fn schedule(&self, intent: &ReminderIntent) {
        self.intents.borrow_mut().push(intent.clone());
    }
}

/// Builds a store over `conn` with a fixed clock, sequential ids and a
/// recording reminder sink, returning the shared handles.
pub fn test_store(
    conn: &Connection,
) -> (
    AppStore<SqliteKeyValueRepository<'_>>,
    FixedClock,
    RecordingReminderSink,
) {
    let clock = FixedClock::at(TEST_ISO, TEST_EPOCH_MS);
    let sink = RecordingReminderSink::default();
    let store = AppStore::with_parts(
        SqliteKeyValueRepository::new(conn),
        Box::new(clock.clone()),
        Box::new(SeqIdGenerator::default()),
        Box::new(sink.clone()),
    );
    (store, clock, sink)
}

/// Minimal valid customer draft.
pub fn customer_draft(name: &str, mobile: &str) -> CustomerDraft {
    CustomerDraft {
        customer_name: name.to_string(),
        mobile_number: mobile.to_string(),
        reference_by: String::new(),
        product: "Product A".to_string(),
        customer_type: CustomerType::Etb,
        remark: String::new(),
        next_visit_date: String::new(),
        next_visit_time: String::new(),
    }
}

/// Minimal valid task draft scheduled at `date_time`.
pub fn task_draft(title: &str, date_time: &str) -> TaskDraft {
    TaskDraft {
        task_title: title.to_string(),
        description: String::new(),
        date_time: date_time.to_string(),
        priority: TaskPriority::Medium,
        set_reminder: false,
    }
}

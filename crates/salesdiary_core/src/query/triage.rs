//! Task triage view.
//!
//! # Responsibility
//! - Partition tasks into overdue / due-today / upcoming / completed
//!   relative to the current day.
//!
//! # Invariants
//! - A completed task appears only in `completed`, never in the pending
//!   groups.
//! - Pending groups sort by `date_time` ascending; `completed` sorts
//!   descending (most recent first).

use crate::model::task::Task;

#[derive(Debug, Default)]
pub struct TaskTriage<'a> {
    /// Incomplete tasks scheduled before today's midnight.
    pub overdue: Vec<&'a Task>,
    /// Incomplete tasks scheduled on the current calendar day.
    pub due_today: Vec<&'a Task>,
    /// Incomplete tasks scheduled strictly later than today.
    pub upcoming: Vec<&'a Task>,
    /// Completed tasks of any date.
    pub completed: Vec<&'a Task>,
}

impl TaskTriage<'_> {
    pub fn pending_count(&self) -> usize {
        self.overdue.len() + self.due_today.len() + self.upcoming.len()
    }
}

/// Partitions `tasks` relative to `today` (`YYYY-MM-DD`).
pub fn triage_tasks<'a>(tasks: &'a [Task], today: &str) -> TaskTriage<'a> {
    let mut triage = TaskTriage::default();

    for task in tasks {
        if task.is_complete {
            triage.completed.push(task);
            continue;
        }
        let date = task.scheduled_date();
        if date < today {
            triage.overdue.push(task);
        } else if date == today {
            triage.due_today.push(task);
        } else {
            triage.upcoming.push(task);
        }
    }

    triage.overdue.sort_by(|a, b| a.date_time.cmp(&b.date_time));
    triage.due_today.sort_by(|a, b| a.date_time.cmp(&b.date_time));
    triage.upcoming.sort_by(|a, b| a.date_time.cmp(&b.date_time));
    triage.completed.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    triage
}

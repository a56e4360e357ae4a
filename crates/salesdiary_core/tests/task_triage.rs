mod common;

use common::{task_draft, test_store, TEST_TODAY};
use salesdiary_core::db::open_db_in_memory;
use salesdiary_core::triage_tasks;

#[test]
fn tasks_partition_by_scheduled_day() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    store
        .add_task(task_draft("Yesterday", "2024-06-09T16:00"))
        .unwrap();
    store
        .add_task(task_draft("Early today", "2024-06-10T00:30"))
        .unwrap();
    store
        .add_task(task_draft("Late today", "2024-06-10T23:00"))
        .unwrap();
    store
        .add_task(task_draft("Tomorrow", "2024-06-11T08:00"))
        .unwrap();

    let triage = triage_tasks(store.tasks(), TEST_TODAY);

    assert_eq!(triage.overdue.len(), 1);
    assert_eq!(triage.overdue[0].task_title, "Yesterday");

    let today: Vec<&str> = triage
        .due_today
        .iter()
        .map(|t| t.task_title.as_str())
        .collect();
    assert_eq!(today, vec!["Early today", "Late today"]);

    assert_eq!(triage.upcoming.len(), 1);
    assert_eq!(triage.upcoming[0].task_title, "Tomorrow");
    assert_eq!(triage.pending_count(), 4);
}

#[test]
fn completed_tasks_leave_the_pending_groups() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    let done_id = store
        .add_task(task_draft("Done yesterday", "2024-06-09T09:00"))
        .unwrap();
    store
        .add_task(task_draft("Still open", "2024-06-09T10:00"))
        .unwrap();
    store.toggle_task_complete(&done_id);

    let triage = triage_tasks(store.tasks(), TEST_TODAY);

    assert_eq!(triage.overdue.len(), 1);
    assert_eq!(triage.overdue[0].task_title, "Still open");
    assert_eq!(triage.completed.len(), 1);
    assert_eq!(triage.completed[0].task_title, "Done yesterday");
    assert!(triage.due_today.is_empty());
    assert!(triage.upcoming.is_empty());
}

#[test]
fn pending_groups_sort_ascending_completed_sorts_descending() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    let ids: Vec<String> = [
        ("A", "2024-06-10T15:00"),
        ("B", "2024-06-10T08:00"),
        ("C", "2024-06-10T11:30"),
    ]
    .into_iter()
    .map(|(title, when)| store.add_task(task_draft(title, when)).unwrap())
    .collect();

    let triage = triage_tasks(store.tasks(), TEST_TODAY);
    let today: Vec<&str> = triage
        .due_today
        .iter()
        .map(|t| t.task_title.as_str())
        .collect();
    assert_eq!(today, vec!["B", "C", "A"]);

    for id in &ids {
        store.toggle_task_complete(id);
    }
    let triage = triage_tasks(store.tasks(), TEST_TODAY);
    let completed: Vec<&str> = triage
        .completed
        .iter()
        .map(|t| t.task_title.as_str())
        .collect();
    assert_eq!(completed, vec!["A", "C", "B"]);
}

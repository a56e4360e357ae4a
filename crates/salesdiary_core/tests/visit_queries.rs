mod common;

use common::{customer_draft, test_store, TEST_TODAY};
use salesdiary_core::db::open_db_in_memory;
use salesdiary_core::{format_visit_time, todays_visits, upcoming_visits, visits_on_date};

fn seed(store: &mut salesdiary_core::AppStore<salesdiary_core::SqliteKeyValueRepository<'_>>) {
    let visits = [
        ("Morning Today", "2024-06-10", "09:00"),
        ("Evening Today", "2024-06-10", "17:30"),
        ("Anytime Today", "2024-06-10", ""),
        ("Tomorrow", "2024-06-11", "11:00"),
        ("Next Week", "2024-06-17", "10:00"),
        ("Last Week", "2024-06-03", "10:00"),
        ("Unscheduled", "", ""),
    ];
    for (name, date, time) in visits {
        let mut draft = customer_draft(name, "9000000000");
        draft.next_visit_date = date.to_string();
        draft.next_visit_time = time.to_string();
        store.add_customer(draft).unwrap();
    }
}

#[test]
fn todays_visits_match_the_calendar_date_sorted_by_time() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);
    seed(&mut store);

    let today = todays_visits(store.customers(), TEST_TODAY);
    let names: Vec<&str> = today.iter().map(|c| c.customer_name.as_str()).collect();
    // Empty time ("anytime") sorts first, then by HH:mm.
    assert_eq!(names, vec!["Anytime Today", "Morning Today", "Evening Today"]);
}

#[test]
fn upcoming_visits_partition_today_tomorrow_later() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);
    seed(&mut store);

    let groups = upcoming_visits(store.customers(), TEST_TODAY);

    assert_eq!(groups.today.len(), 3);
    assert_eq!(groups.tomorrow.len(), 1);
    assert_eq!(groups.tomorrow[0].customer_name, "Tomorrow");
    assert_eq!(groups.later.len(), 1);
    assert_eq!(groups.later[0].customer_name, "Next Week");

    // Past visits and unscheduled customers appear nowhere.
    let all: Vec<&str> = groups
        .today
        .iter()
        .chain(&groups.tomorrow)
        .chain(&groups.later)
        .map(|c| c.customer_name.as_str())
        .collect();
    assert!(!all.contains(&"Last Week"));
    assert!(!all.contains(&"Unscheduled"));
}

#[test]
fn upcoming_visits_handle_month_end_tomorrow() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    let mut draft = customer_draft("First Of July", "9000000000");
    draft.next_visit_date = "2024-07-01".to_string();
    store.add_customer(draft).unwrap();

    let groups = upcoming_visits(store.customers(), "2024-06-30");
    assert_eq!(groups.tomorrow.len(), 1);
    assert!(groups.later.is_empty());
}

#[test]
fn visits_on_date_is_an_exact_lookup() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);
    seed(&mut store);

    let picked = visits_on_date(store.customers(), "2024-06-17");
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].customer_name, "Next Week");
    assert!(visits_on_date(store.customers(), "2024-06-18").is_empty());
}

#[test]
fn visit_time_formats_as_twelve_hour_display() {
    assert_eq!(format_visit_time(""), "Anytime");
    assert_eq!(format_visit_time("00:05"), "12:05 AM");
    assert_eq!(format_visit_time("09:00"), "9:00 AM");
    assert_eq!(format_visit_time("12:00"), "12:00 PM");
    assert_eq!(format_visit_time("17:30"), "5:30 PM");
}

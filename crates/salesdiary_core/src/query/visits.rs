//! Scheduled-visit views.
//!
//! # Responsibility
//! - Group customers by their next scheduled visit relative to the
//!   current day.
//!
//! # Invariants
//! - Customers with an empty `next_visit_date` never appear in any group.
//! - Groups are sorted by `next_visit_time` ascending; an empty time
//!   ("anytime") sorts first.

use crate::clock::next_day;
use crate::model::customer::Customer;

/// Customers whose next visit falls on `today`, sorted by visit time.
pub fn todays_visits<'a>(customers: &'a [Customer], today: &str) -> Vec<&'a Customer> {
    let mut visits: Vec<&Customer> = customers
        .iter()
        .filter(|c| !c.next_visit_date.is_empty() && c.next_visit_date == today)
        .collect();
    sort_by_time(&mut visits);
    visits
}

/// Customers whose next visit falls exactly on `date`.
pub fn visits_on_date<'a>(customers: &'a [Customer], date: &str) -> Vec<&'a Customer> {
    todays_visits(customers, date)
}

/// Upcoming visits partitioned relative to the current day.
#[derive(Debug, Default)]
pub struct UpcomingVisits<'a> {
    pub today: Vec<&'a Customer>,
    pub tomorrow: Vec<&'a Customer>,
    pub later: Vec<&'a Customer>,
}

impl UpcomingVisits<'_> {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty() && self.later.is_empty()
    }
}

/// Partitions customers with a today-or-later visit date into
/// `{today, tomorrow, later}`.
///
/// Past visits and customers without a scheduled date are excluded.
pub fn upcoming_visits<'a>(customers: &'a [Customer], today: &str) -> UpcomingVisits<'a> {
    let tomorrow = next_day(today);
    let mut groups = UpcomingVisits::default();

    for customer in customers {
        let date = customer.next_visit_date.as_str();
        if date.is_empty() || date < today {
            continue;
        }
        if date == today {
            groups.today.push(customer);
        } else if Some(date) == tomorrow.as_deref() {
            groups.tomorrow.push(customer);
        } else {
            groups.later.push(customer);
        }
    }

    sort_by_time(&mut groups.today);
    sort_by_time(&mut groups.tomorrow);
    sort_by_time(&mut groups.later);
    groups
}

/// Renders an `HH:mm` visit time as 12-hour display text; an empty time
/// reads "Anytime".
pub fn format_visit_time(time: &str) -> String {
    if time.is_empty() {
        return "Anytime".to_string();
    }
    let Some((hour, minute)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hour.parse::<u32>() else {
        return time.to_string();
    };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hour}:{minute} {meridiem}")
}

fn sort_by_time(visits: &mut [&Customer]) {
    visits.sort_by(|a, b| a.next_visit_time.cmp(&b.next_visit_time));
}

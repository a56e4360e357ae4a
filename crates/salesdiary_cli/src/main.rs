//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `salesdiary_core` linkage.
//! - Exercise one end-to-end store round-trip against in-memory SQLite.

use salesdiary_core::db::open_db_in_memory;
use salesdiary_core::{AppStore, Clock, CustomerDraft, SqliteKeyValueRepository, SystemClock};

fn main() {
    println!("salesdiary_core ping={}", salesdiary_core::ping());
    println!("salesdiary_core version={}", salesdiary_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open in-memory database: {err}");
            std::process::exit(1);
        }
    };
    let mut store = AppStore::new(SqliteKeyValueRepository::new(&conn));

    let draft = CustomerDraft {
        customer_name: "Smoke Test".to_string(),
        mobile_number: "5550100".to_string(),
        ..CustomerDraft::default()
    };
    match store.add_customer(draft) {
        Ok(id) => println!(
            "store smoke: customers={} visits={} first_id={id}",
            store.customers().len(),
            store.visit_history().len()
        ),
        Err(err) => {
            eprintln!("store smoke failed: {err}");
            std::process::exit(1);
        }
    }

    let today = SystemClock.today();
    println!(
        "todays_visits={}",
        salesdiary_core::todays_visits(store.customers(), &today).len()
    );
}

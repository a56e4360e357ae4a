mod common;

use common::{customer_draft, test_store};
use rusqlite::params;
use salesdiary_core::db::{open_db, open_db_in_memory};
use salesdiary_core::{AppStore, KeyValueRepository, SqliteKeyValueRepository};

#[test]
fn read_and_write_round_trip_raw_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKeyValueRepository::new(&conn);

    assert_eq!(repo.read("customers").unwrap(), None);

    repo.write("customers", "[]").unwrap();
    assert_eq!(repo.read("customers").unwrap().as_deref(), Some("[]"));

    // A second write replaces the stored value in full.
    repo.write("customers", "[{\"id\":\"cust_1\"}]").unwrap();
    assert_eq!(
        repo.read("customers").unwrap().as_deref(),
        Some("[{\"id\":\"cust_1\"}]")
    );
}

#[test]
fn corrupt_stored_collection_falls_back_to_its_default() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKeyValueRepository::new(&conn);
        repo.write("customers", "{not json at all").unwrap();
        repo.write("products", "42").unwrap();
    }

    let (store, _clock, _sink) = test_store(&conn);

    // Corrupt customers fall back to empty, corrupt products to the seed
    // defaults; startup must not raise either way.
    assert!(store.customers().is_empty());
    assert_eq!(store.products(), ["Product A", "Product B"]);
}

#[test]
fn failed_durable_write_still_updates_in_memory_state() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    // Break the backing table underneath the live store.
    conn.execute_batch("DROP TABLE kv_entries;").unwrap();

    let id = store
        .add_customer(customer_draft("Asha Verma", "9876543210"))
        .unwrap();

    // The caller observes the new state even though nothing was persisted.
    assert!(store.customer_by_id(&id).is_some());
    assert_eq!(store.visit_history().len(), 1);
}

#[test]
fn state_survives_a_restart_via_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("salesdiary.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let (mut store, _clock, _sink) = test_store(&conn);
        let mut draft = customer_draft("Asha Verma", "9876543210");
        draft.next_visit_date = "2024-06-15".to_string();
        store.add_customer(draft).unwrap();
        store.add_product("Loan");
    }

    let conn = open_db(&db_path).unwrap();
    let (reopened, _clock, _sink) = test_store(&conn);

    assert_eq!(reopened.customers().len(), 1);
    assert_eq!(reopened.customers()[0].customer_name, "Asha Verma");
    assert_eq!(reopened.customers()[0].next_visit_date, "2024-06-15");
    assert_eq!(reopened.visit_history().len(), 1);
    assert_eq!(
        reopened.products(),
        ["Product A", "Product B", "Loan"]
    );
}

#[test]
fn stored_json_keeps_the_original_camel_case_shape() {
    let conn = open_db_in_memory().unwrap();
    let (mut store, _clock, _sink) = test_store(&conn);

    store
        .add_customer(customer_draft("Asha Verma", "9876543210"))
        .unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM kv_entries WHERE key = ?1;",
            params!["customers"],
            |row| row.get(0),
        )
        .unwrap();

    assert!(raw.contains("\"customerName\":\"Asha Verma\""));
    assert!(raw.contains("\"mobileNumber\":\"9876543210\""));
    assert!(raw.contains("\"customerType\":\"ETB\""));
}

#[test]
fn data_written_by_earlier_releases_loads_unchanged() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKeyValueRepository::new(&conn);
        repo.write(
            "customers",
            r#"[{"id":"cust_1718000000000","customerName":"Meena Shah","mobileNumber":"8800112233","referenceBy":"walk-in","product":"Loan","customerType":"NTB","remark":"","nextVisitDate":"2024-06-15","nextVisitTime":"","createdAt":"2024-06-01T10:00:00"}]"#,
        )
        .unwrap();
        repo.write(
            "settings",
            r#"{"userName":"Asha","defaultReminderTime":"07:45"}"#,
        )
        .unwrap();
    }

    let (store, _clock, _sink) = test_store(&conn);
    let customer = store.customer_by_id("cust_1718000000000").unwrap();
    assert_eq!(customer.customer_name, "Meena Shah");
    assert_eq!(customer.next_visit_time, "");
    assert_eq!(store.settings().user_name, "Asha");
    assert_eq!(store.settings().default_reminder_time, "07:45");
}

#[test]
fn unknown_keys_in_storage_are_left_alone() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKeyValueRepository::new(&conn);
        repo.write("someOtherFeature", "keep me").unwrap();
    }

    let (mut store, _clock, _sink) = test_store(&conn);
    store
        .add_customer(customer_draft("Asha Verma", "9876543210"))
        .unwrap();

    let repo = SqliteKeyValueRepository::new(&conn);
    assert_eq!(
        repo.read("someOtherFeature").unwrap().as_deref(),
        Some("keep me")
    );
}

// Exercise the generic bound: the store runs on any KeyValueRepository.
#[test]
fn store_is_generic_over_the_repository_contract() {
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapRepo {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueRepository for MapRepo {
        fn read(&self, key: &str) -> salesdiary_core::RepoResult<Option<String>> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> salesdiary_core::RepoResult<()> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    let mut store = AppStore::new(MapRepo::default());
    store
        .add_customer(customer_draft("Asha Verma", "9876543210"))
        .unwrap();
    assert_eq!(store.customers().len(), 1);
}

//! Key-value repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide `read`/`write` over the `kv_entries` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `write` replaces the stored value atomically for its key.
//! - Keys are the fixed per-collection names in [`keys`].

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage keys, one per persisted collection.
///
/// The literal values match what earlier releases wrote, so existing
/// on-device data keeps loading.
pub mod keys {
    pub const CUSTOMERS: &str = "customers";
    pub const TASKS: &str = "tasks";
    pub const VISIT_HISTORY: &str = "visitHistory";
    pub const PRODUCTS: &str = "products";
    pub const SETTINGS: &str = "settings";
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Transport error for key-value persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage contract: raw text in, raw text out, keyed by fixed
/// collection names.
pub trait KeyValueRepository {
    fn read(&self, key: &str) -> RepoResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed key-value repository.
pub struct SqliteKeyValueRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository<'_> {
    fn read(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

//! Tabular CSV export.
//!
//! # Responsibility
//! - Render any uniform record sequence as comma-separated text the
//!   spreadsheet import flow understands.
//!
//! # Invariants
//! - The header row lists field names in struct declaration order.
//! - Every field value is individually JSON-stringified before joining;
//!   existing exported files parse with the same scheme, so the quoting
//!   must not change.

use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    /// Nothing to export; the caller surfaces "No data to export".
    NoRecords,
    /// Records must serialize to JSON objects to form a table.
    NotTabular,
    Serialize(serde_json::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRecords => write!(f, "no records to export"),
            Self::NotTabular => write!(f, "records do not serialize to objects"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::NoRecords | Self::NotTabular => None,
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Renders `records` as CSV text: one header row of field names plus one
/// row per record, fields JSON-stringified and comma-joined, rows joined
/// with `\n`.
pub fn to_csv_table<T: Serialize>(records: &[T]) -> ExportResult<String> {
    let first = records.first().ok_or(ExportError::NoRecords)?;

    let Value::Object(first_fields) = serde_json::to_value(first)? else {
        return Err(ExportError::NotTabular);
    };
    let headers: Vec<String> = first_fields.keys().cloned().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));

    for record in records {
        let Value::Object(fields) = serde_json::to_value(record)? else {
            return Err(ExportError::NotTabular);
        };
        let row: Vec<String> = headers
            .iter()
            .map(|header| {
                let value = fields.get(header).unwrap_or(&Value::Null);
                serde_json::to_string(value)
            })
            .collect::<Result<_, _>>()?;
        lines.push(row.join(","));
    }

    Ok(lines.join("\n"))
}

/// Filename for the customers-screen export.
pub fn customers_csv_filename(date: &str) -> String {
    format!("customers_{date}.csv")
}

/// Filename for the settings-screen full export.
///
/// The `dairy` spelling is what existing user files carry; it stays.
pub fn full_export_csv_filename(date: &str) -> String {
    format!("sales_dairy_all_customers_{date}.csv")
}

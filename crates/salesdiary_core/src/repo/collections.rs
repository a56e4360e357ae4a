//! Persisted-collection manager: load-with-default and best-effort persist.
//!
//! # Responsibility
//! - Deserialize each collection at startup, falling back to its named
//!   default when the stored value is absent or unparseable.
//! - Serialize and rewrite the full collection on every mutation.
//!
//! # Invariants
//! - `load_or_default` never raises; corrupt storage must not crash the
//!   app.
//! - `persist` never raises; a failed durable write leaves in-memory state
//!   authoritative and is visible only through the returned outcome and
//!   the log.

use super::kv_repo::KeyValueRepository;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Result of a best-effort durable write.
///
/// The store intentionally does not branch on this value; it exists so the
/// ignore is explicit at the call site rather than hidden in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PersistOutcome {
    Durable,
    Failed,
}

/// Loads one collection, returning `default` when the key is absent, the
/// read fails, or the stored text does not decode.
pub fn load_or_default<T, R>(repo: &R, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    R: KeyValueRepository + ?Sized,
{
    let stored = match repo.read(key) {
        Ok(stored) => stored,
        Err(err) => {
            error!("event=collection_load module=repo status=error key={key} error={err}");
            return default;
        }
    };

    let Some(text) = stored else {
        debug!("event=collection_load module=repo status=ok key={key} source=default");
        return default;
    };

    match serde_json::from_str(&text) {
        Ok(value) => {
            debug!("event=collection_load module=repo status=ok key={key} source=stored");
            value
        }
        Err(err) => {
            warn!(
                "event=collection_load module=repo status=error key={key} source=default error={err}"
            );
            default
        }
    }
}

/// Serializes `value` in full and overwrites the stored text for `key`.
///
/// Failures are logged and reported through [`PersistOutcome`]; they never
/// interrupt the caller's flow.
pub fn persist<T, R>(repo: &R, key: &str, value: &T) -> PersistOutcome
where
    T: Serialize,
    R: KeyValueRepository + ?Sized,
{
    let text = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            error!("event=collection_persist module=repo status=error key={key} error={err}");
            return PersistOutcome::Failed;
        }
    };

    match repo.write(key, &text) {
        Ok(()) => PersistOutcome::Durable,
        Err(err) => {
            error!("event=collection_persist module=repo status=error key={key} error={err}");
            PersistOutcome::Failed
        }
    }
}

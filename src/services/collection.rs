//! JSON array collections stored under a single key.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Load the collection under `key`.
///
/// A missing key is an empty collection. So is a value that no longer parses:
/// it is logged and discarded rather than blocking every later write.
pub(crate) fn load<S, T>(store: &S, key: &str) -> Result<Vec<T>, AppError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable collection");
            Ok(Vec::new())
        }
    }
}

/// Replace the collection under `key`.
pub(crate) fn save<S, T>(store: &S, key: &str, items: &[T]) -> Result<(), AppError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let raw = serde_json::to_string(items)?;
    store.set(key, &raw)
}

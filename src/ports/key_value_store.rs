//! Flat key-value persistence.
//!
//! Modeled on browser local storage: each key holds one serialized string,
//! and collections are rewritten whole on every change. Concurrent writers are
//! not coordinated; the last write wins.

use crate::domain::AppError;

/// Port for string-keyed storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the value stored under `key`. Either fully succeeds or leaves the old value.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

//! `zentro-storage` — durable client-side key-value storage.
//!
//! The cart and session layers treat storage as a passive collaborator: a
//! flat string-keyed map with whole-value writes, the same contract a
//! browser's localStorage offers. Two implementations are provided: an
//! in-memory map for tests and ephemeral sessions, and a JSON-file-backed
//! store for desktop persistence.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use std::rc::Rc;

/// Durable key-value storage contract.
///
/// Writes replace the value wholesale; there are no partial or delta
/// writes. Methods take `&self` because there is exactly one logical writer
/// (the active session) — implementations use interior mutability where
/// they need it.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the entry for `key` entirely. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

// One store commonly backs both the session and the cart.
impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

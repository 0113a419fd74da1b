//! In-memory key-value store for tests and ephemeral sessions.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{KeyValueStore, StorageError};

/// Non-durable store backed by a plain map.
///
/// Also doubles as a fault-injection harness in tests: `fail_writes` makes
/// every `set`/`remove` report the store as unavailable, which is how the
/// quota-exceeded path of a real browser store is exercised.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle write failures (get still works, set/remove error out).
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::unavailable("write rejected (simulated)"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::unavailable("remove rejected (simulated)"));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

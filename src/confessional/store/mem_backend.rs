use super::backend::{StorageBackend, StorageKey};
use crate::error::{ConfessionError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since confessional is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<StorageKey, String>>,
    simulate_write_error: Cell<bool>,
    simulate_remove_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make only `remove` fail, leaving writes working.
    pub fn set_simulate_remove_error(&self, simulate: bool) {
        self.simulate_remove_error.set(simulate);
    }

    /// Test helper to seed a raw value, bypassing the error simulation.
    pub fn insert_raw(&self, key: StorageKey, value: &str) {
        self.values.borrow_mut().insert(key, value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>> {
        Ok(self.values.borrow().get(&key).cloned())
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ConfessionError::Store("Simulated write error".to_string()));
        }
        self.values.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<()> {
        if self.simulate_write_error.get() || self.simulate_remove_error.get() {
            return Err(ConfessionError::Store("Simulated write error".to_string()));
        }
        self.values.borrow_mut().remove(&key);
        Ok(())
    }

    fn location(&self, key: StorageKey) -> PathBuf {
        PathBuf::from(format!("memory://{}", key.as_str()))
    }
}

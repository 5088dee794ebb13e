use super::Storage;
use crate::error::{Result, ShelfError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemStorage {
    items: HashMap<String, String>,
    simulate_write_error: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Seeds a raw value, bypassing write error simulation.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl Storage for MemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

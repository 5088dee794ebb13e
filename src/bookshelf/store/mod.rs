//! # Storage Layer
//!
//! Books are kept in a small key-value store, in the spirit of a browser's
//! local storage: string keys mapping to string values. The [`Storage`] trait
//! is that abstraction; the record store above it decides what the keys are
//! and how values are encoded.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production storage
//!   - One file per key: `{data_dir}/{key}.json`
//!   - Writes go through a temporary file and a rename
//!
//! - [`memory::MemStorage`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/bookshelf/
//! ├── bookRecords.json     # JSON array of book records
//! ├── seedCompleted.json   # JSON boolean
//! └── config.json          # Presentation configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract key-value storage.
///
/// `get_item` returns `Ok(None)` for a key that was never written. Errors are
/// reserved for the medium itself failing (permissions, disk).
pub trait Storage {
    /// Read the raw value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

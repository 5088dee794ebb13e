//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic book collection library** with a terminal
//! client. The library owns the collection, the filter and persistence; the
//! client only renders what it is given and forwards user intent.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders cards and tables      │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selectors, loose fields → BookForm)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State (shelf.rs → book_store.rs, filter.rs)                │
//! │  - Records, filter text, cached filtered view, subscribers  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Storage key-value trait                                  │
//! │  - FileStorage (production), MemStorage (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! Two keys, each holding JSON: `bookRecords` (the ordered array of books)
//! and `seedCompleted` (whether the example books were ever inserted). With
//! [`store::fs::FileStorage`] each key is a `<key>.json` file in the data
//! directory.
//!
//! ## Addressing books
//!
//! Ids are UUIDs. The terminal uses 1-based display indexes into the full
//! collection instead; see [`index`].
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never prints, never exits and only logs through
//! `tracing`, so the same core could back any other front end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic
//! - [`shelf`]: State container with subscriptions
//! - [`book_store`]: The persisted record collection and seeding
//! - [`filter`]: Name filter and filtered view
//! - [`form`]: Input rules for new books
//! - [`index`]: Display indexes and selectors
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Display preferences
//! - [`init`]: Data directory resolution and startup
//! - [`telemetry`]: Log subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod book_store;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod index;
pub mod init;
pub mod model;
pub mod seed;
pub mod shelf;
pub mod store;
pub mod telemetry;

//! # Commands
//!
//! One module per user-facing operation. Each `run` takes the [`Shelf`] (or
//! the data directory, for config) plus already-parsed arguments, performs the
//! operation and describes the outcome as a [`CmdResult`]: the books it
//! touched or listed, and human-readable messages. Nothing here prints.
//!
//! [`Shelf`]: crate::shelf::Shelf

use crate::config::ShelfConfig;
use crate::index::DisplayBook;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod view;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<DisplayBook>,
    pub listed_books: Vec<DisplayBook>,
    /// The filter the listing was produced with, if any.
    pub filter: Option<String>,
    /// Size of the whole collection, regardless of filtering.
    pub total: usize,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<DisplayBook>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether the listing is narrowed by a non-blank filter.
    pub fn filter_active(&self) -> bool {
        self.filter
            .as_deref()
            .map(crate::filter::is_active)
            .unwrap_or(false)
    }
}

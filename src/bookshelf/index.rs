//! # Display Indexes
//!
//! Book ids are UUIDs, which nobody wants to type. The terminal addresses
//! books by their 1-based position in the full collection instead, so
//! `bookshelf rm 3` removes the third book in insertion order.
//!
//! The index is canonical: filtering hides books but does not renumber the
//! ones left, so an index read off a filtered list can be used as-is in the
//! next command.

use crate::model::Book;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }

    pub fn position(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A user input selecting a book, either by display index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSelector {
    Index(DisplayIndex),
    Id(String),
}

impl fmt::Display for BookSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSelector::Index(idx) => write!(f, "{}", idx),
            BookSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for BookSelector {
    type Err = String;

    /// Anything made only of digits is an index; everything else is an id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return DisplayIndex::from_str(s).map(BookSelector::Index);
        }
        Ok(BookSelector::Id(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBook {
    pub index: DisplayIndex,
    pub book: Book,
}

/// Finds the book a selector refers to.
pub fn select<'a>(books: &'a [Book], selector: &BookSelector) -> Option<(DisplayIndex, &'a Book)> {
    match selector {
        BookSelector::Index(idx) => {
            let pos = idx.position()?;
            books.get(pos).map(|b| (*idx, b))
        }
        BookSelector::Id(id) => books
            .iter()
            .position(|b| &b.id == id)
            .map(|pos| (DisplayIndex::from_position(pos), &books[pos])),
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<BookSelector>, String> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

//! # Record Store
//!
//! [`BookStore`] owns the canonical, ordered sequence of books and the
//! seed-completion flag, both persisted through a [`Storage`] backend:
//!
//! - [`BOOKS_KEY`] holds a JSON array of records
//! - [`SEED_KEY`] holds a JSON boolean
//!
//! Every mutation is computed on a copy, written to storage, and only then
//! committed to memory. A failed write returns the error and leaves the store
//! exactly as it was.
//!
//! Unreadable values (corrupt JSON, wrong shape) are treated as absent: the
//! store starts from the default and the next write replaces them.

use crate::error::Result;
use crate::model::{Book, BookFields};
use crate::seed::seed_books;
use crate::store::Storage;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use uuid::Uuid;

pub const BOOKS_KEY: &str = "bookRecords";
pub const SEED_KEY: &str = "seedCompleted";

pub struct BookStore<S: Storage> {
    storage: S,
    books: Vec<Book>,
    seed_completed: bool,
}

impl<S: Storage> BookStore<S> {
    /// Loads persisted state and runs [`BookStore::seed`] once.
    pub fn open(storage: S) -> Result<Self> {
        let books: Vec<Book> = read_or_default(&storage, BOOKS_KEY)?;
        let books = dedupe_ids(books);
        let seed_completed: bool = read_or_default(&storage, SEED_KEY)?;
        tracing::debug!(books = books.len(), seed_completed, "book store loaded");

        let mut store = Self {
            storage,
            books,
            seed_completed,
        };
        store.seed()?;
        Ok(store)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn is_seeded(&self) -> bool {
        self.seed_completed
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends a new record with a fresh id and returns it.
    pub fn add_book(&mut self, fields: BookFields) -> Result<Book> {
        let mut book = Book::new(fields);
        while self.get(&book.id).is_some() {
            book.id = Uuid::new_v4().to_string();
        }

        let mut next = self.books.clone();
        next.push(book.clone());
        self.persist_books(&next)?;
        self.books = next;

        tracing::info!(id = %book.id, name = %book.name, "book added");
        Ok(book)
    }

    /// Removes the record with `id`. Returns the removed record, or `None`
    /// when no such record exists (which is not an error).
    pub fn remove_book(&mut self, id: &str) -> Result<Option<Book>> {
        let Some(pos) = self.books.iter().position(|b| b.id == id) else {
            tracing::debug!(id, "remove skipped, no such book");
            return Ok(None);
        };

        let mut next = self.books.clone();
        let removed = next.remove(pos);
        self.persist_books(&next)?;
        self.books = next;

        tracing::info!(id, name = %removed.name, "book removed");
        Ok(Some(removed))
    }

    /// Inserts the example books into an empty collection, at most once.
    ///
    /// Returns `true` when examples were inserted. The flag is set whether or
    /// not anything was inserted, so examples never come back after the user
    /// has emptied the collection.
    pub fn seed(&mut self) -> Result<bool> {
        if self.seed_completed {
            return Ok(false);
        }

        let mut inserted = false;
        if self.books.is_empty() {
            let seeded: Vec<Book> = seed_books().into_iter().map(Book::new).collect();
            self.persist_books(&seeded)?;
            self.books = seeded;
            inserted = true;
            tracing::info!(count = self.books.len(), "example books inserted");
        }

        self.storage
            .set_item(SEED_KEY, &serde_json::to_string(&true)?)?;
        self.seed_completed = true;
        Ok(inserted)
    }

    fn persist_books(&mut self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string(books)?;
        self.storage.set_item(BOOKS_KEY, &json)?;
        tracing::debug!(count = books.len(), "books persisted");
        Ok(())
    }
}

fn read_or_default<T, S>(storage: &S, key: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
    S: Storage,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "unreadable stored value, using default");
            Ok(T::default())
        }
    }
}

fn dedupe_ids(books: Vec<Book>) -> Vec<Book> {
    let mut seen = HashSet::new();
    let total = books.len();
    let unique: Vec<Book> = books
        .into_iter()
        .filter(|b| seen.insert(b.id.clone()))
        .collect();
    if unique.len() != total {
        tracing::warn!(
            dropped = total - unique.len(),
            "duplicate book ids in storage, keeping first occurrence"
        );
    }
    unique
}

//! # Shelf: the application state container
//!
//! [`Shelf`] bundles the record store, the filter text and the cached
//! filtered view into one object. It is created by the application root and
//! handed by reference to whatever needs it; there is no global instance.
//!
//! ## Contract
//!
//! - **Read**: [`Shelf::books`], [`Shelf::filter`], [`Shelf::filtered`],
//!   [`Shelf::filtered_indexed`]
//! - **Write**: [`Shelf::add_book`], [`Shelf::remove_book`],
//!   [`Shelf::set_filter`]
//! - **Subscribe**: [`Shelf::subscribe`] registers a callback that runs
//!   synchronously after each committed change. Failed writes and no-op
//!   removals notify nobody.
//!
//! Callbacks receive only the [`ShelfEvent`]; they read fresh state from the
//! shelf after the mutating call has returned.

use crate::book_store::BookStore;
use crate::error::Result;
use crate::filter::{FilterState, FilteredView};
use crate::index::{DisplayBook, DisplayIndex};
use crate::model::{Book, BookFields};
use crate::store::Storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfEvent {
    BooksChanged,
    FilterChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ShelfEvent)>;

pub struct Shelf<S: Storage> {
    store: BookStore<S>,
    filter: FilterState,
    view: FilteredView,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: Storage> Shelf<S> {
    /// Opens the record store (loading and seeding it) and starts with an
    /// empty filter.
    pub fn open(storage: S) -> Result<Self> {
        Ok(Self::from_store(BookStore::open(storage)?))
    }

    pub fn from_store(store: BookStore<S>) -> Self {
        Self {
            store,
            filter: FilterState::new(),
            view: FilteredView::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn store(&self) -> &BookStore<S> {
        &self.store
    }

    pub fn into_store(self) -> BookStore<S> {
        self.store
    }

    pub fn books(&self) -> &[Book] {
        self.store.books()
    }

    pub fn is_seeded(&self) -> bool {
        self.store.is_seeded()
    }

    pub fn filter(&self) -> &str {
        self.filter.get()
    }

    pub fn filter_active(&self) -> bool {
        self.filter.is_active()
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter.set(text);
        self.view.invalidate();
        self.notify(ShelfEvent::FilterChanged);
    }

    /// The books matching the current filter.
    pub fn filtered(&self) -> Vec<&Book> {
        self.view.resolve(self.store.books(), self.filter.get())
    }

    /// The filtered books paired with their canonical display index.
    pub fn filtered_indexed(&self) -> Vec<DisplayBook> {
        let books = self.store.books();
        self.view
            .positions(books, self.filter.get())
            .into_iter()
            .filter_map(|pos| {
                books.get(pos).map(|book| DisplayBook {
                    index: DisplayIndex::from_position(pos),
                    book: book.clone(),
                })
            })
            .collect()
    }

    pub fn add_book(&mut self, fields: BookFields) -> Result<Book> {
        let book = self.store.add_book(fields)?;
        self.view.invalidate();
        self.notify(ShelfEvent::BooksChanged);
        Ok(book)
    }

    pub fn remove_book(&mut self, id: &str) -> Result<Option<Book>> {
        let removed = self.store.remove_book(id)?;
        if removed.is_some() {
            self.view.invalidate();
            self.notify(ShelfEvent::BooksChanged);
        }
        Ok(removed)
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(ShelfEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: ShelfEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

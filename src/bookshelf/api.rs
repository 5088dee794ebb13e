//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! front end (the one-shot CLI commands and the interactive browse session
//! alike).
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs** (raw selector strings become [`BookSelector`]s,
//!   loose CLI arguments become a [`BookForm`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and holds no business logic of its own.
//!
//! `ShelfApi<S: Storage>` is generic over the storage backend: production runs
//! on `FileStorage`, tests on `MemStorage`.

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::form::{BookForm, FormField, DESCRIPTION_LIMIT};
use crate::index::{parse_selectors, BookSelector, DisplayBook};
use crate::shelf::Shelf;
use crate::store::Storage;

pub struct ShelfApi<S: Storage> {
    shelf: Shelf<S>,
    paths: commands::ShelfPaths,
}

impl<S: Storage> ShelfApi<S> {
    pub fn new(shelf: Shelf<S>, paths: commands::ShelfPaths) -> Self {
        Self { shelf, paths }
    }

    /// Opens (and on first use seeds) the shelf backed by `storage`.
    pub fn open(storage: S, paths: commands::ShelfPaths) -> Result<Self> {
        Ok(Self::new(Shelf::open(storage)?, paths))
    }

    /// Adds a book from a form that is already filled in.
    pub fn add_book(&mut self, form: &mut BookForm) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.shelf, form)
    }

    /// Adds a book from loose field values, applying the same input rules as
    /// the form.
    pub fn create_book(
        &mut self,
        name: String,
        author: Option<String>,
        description: Option<String>,
        picture: Option<String>,
    ) -> Result<commands::CmdResult> {
        let mut form = BookForm::new().with(FormField::Name, &name);
        if let Some(author) = author {
            form.set(FormField::Author, &author);
        }
        if let Some(picture) = picture {
            form.set(FormField::Picture, &picture);
        }
        let truncated = description
            .map(|d| form.set(FormField::Description, &d))
            .unwrap_or(false);

        let mut result = commands::add::run(&mut self.shelf, &mut form)?;
        if truncated {
            result.add_message(commands::CmdMessage::warning(format!(
                "Description truncated to {} characters",
                DESCRIPTION_LIMIT
            )));
        }
        Ok(result)
    }

    pub fn list_books(&mut self, filter: Option<String>) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.shelf, filter)
    }

    pub fn view_books<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = to_selectors(selectors)?;
        commands::view::run(&self.shelf, &selectors)
    }

    pub fn delete_books<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = to_selectors(selectors)?;
        commands::delete::run(&mut self.shelf, &selectors)
    }

    /// Deletes books by id only. Used after confirming the targets returned
    /// by [`ShelfApi::delete_targets`], so an id made of digits is never
    /// read back as a display index.
    pub fn delete_by_ids(&mut self, ids: &[String]) -> Result<commands::CmdResult> {
        if ids.is_empty() {
            return Err(ShelfError::Api("No book selected".to_string()));
        }
        let selectors: Vec<BookSelector> = ids.iter().cloned().map(BookSelector::Id).collect();
        commands::delete::run(&mut self.shelf, &selectors)
    }

    /// The books a delete with these selectors would remove, for confirming
    /// with the user first. Unknown ids are left out; unknown indexes fail.
    pub fn delete_targets<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<DisplayBook>> {
        let selectors = to_selectors(selectors)?;
        let mut targets: Vec<DisplayBook> = Vec::new();
        for selector in &selectors {
            if let Some((index, book)) =
                commands::helpers::resolve_selector(self.shelf.books(), selector)?
            {
                if !targets.iter().any(|t| t.book.id == book.id) {
                    targets.push(DisplayBook {
                        index,
                        book: book.clone(),
                    });
                }
            }
        }
        Ok(targets)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    pub fn shelf(&self) -> &Shelf<S> {
        &self.shelf
    }

    pub fn shelf_mut(&mut self) -> &mut Shelf<S> {
        &mut self.shelf
    }
}

fn to_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<BookSelector>> {
    if inputs.is_empty() {
        return Err(ShelfError::Api("No book selected".to_string()));
    }
    parse_selectors(inputs).map_err(ShelfError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};

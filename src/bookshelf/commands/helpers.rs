use crate::error::{Result, ShelfError};
use crate::index::{select, BookSelector, DisplayBook, DisplayIndex};
use crate::model::Book;

/// Resolves one selector against the full collection.
///
/// An index that points past the end is an error, since the user read it off
/// a listing that no longer matches. An unknown id is `Ok(None)`; callers
/// decide whether that matters.
pub fn resolve_selector<'a>(
    books: &'a [Book],
    selector: &BookSelector,
) -> Result<Option<(DisplayIndex, &'a Book)>> {
    match (selector, select(books, selector)) {
        (_, Some(found)) => Ok(Some(found)),
        (BookSelector::Index(idx), None) => {
            Err(ShelfError::Api(format!("Index {} not found", idx)))
        }
        (BookSelector::Id(_), None) => Ok(None),
    }
}

/// Resolves every selector, failing on the first one that matches nothing.
pub fn books_by_selectors(books: &[Book], selectors: &[BookSelector]) -> Result<Vec<DisplayBook>> {
    selectors
        .iter()
        .map(|sel| match resolve_selector(books, sel)? {
            Some((index, book)) => Ok(DisplayBook {
                index,
                book: book.clone(),
            }),
            None => Err(ShelfError::BookNotFound(sel.to_string())),
        })
        .collect()
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{BookSelector, DisplayBook, DisplayIndex};
use crate::shelf::Shelf;
use crate::store::Storage;

use super::helpers::resolve_selector;

/// Deletes the selected books.
///
/// All selectors are resolved against the collection as it is before the
/// first removal, so `rm 1 2` removes the first two books rather than the
/// first and third. Unknown indexes abort before anything is removed. Unknown
/// ids are reported and skipped.
pub fn run<S: Storage>(shelf: &mut Shelf<S>, selectors: &[BookSelector]) -> Result<CmdResult> {
    let mut targets: Vec<(DisplayIndex, String)> = Vec::new();
    let mut result = CmdResult::default();

    for selector in selectors {
        match resolve_selector(shelf.books(), selector)? {
            Some((index, book)) => {
                if !targets.iter().any(|(_, id)| id == &book.id) {
                    targets.push((index, book.id.clone()));
                }
            }
            None => result.add_message(CmdMessage::info(format!(
                "No book with id {}, nothing to delete",
                selector
            ))),
        }
    }

    for (index, id) in targets {
        if let Some(book) = shelf.remove_book(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Book deleted ({}): {}",
                index, book.name
            )));
            result.affected_books.push(DisplayBook { index, book });
        }
    }

    result.total = shelf.books().len();
    Ok(result)
}

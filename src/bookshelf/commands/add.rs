use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::BookForm;
use crate::index::{DisplayBook, DisplayIndex};
use crate::shelf::Shelf;
use crate::store::Storage;

/// Submits `form` and appends the resulting book.
///
/// A form that fails validation is left holding its values and errors, and
/// nothing is written.
pub fn run<S: Storage>(shelf: &mut Shelf<S>, form: &mut BookForm) -> Result<CmdResult> {
    let fields = form.submit()?;
    let book = shelf.add_book(fields)?;
    let index = DisplayIndex::from_position(shelf.books().len().saturating_sub(1));

    let mut result = CmdResult::default().with_total(shelf.books().len());
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        index, book.name
    )));
    result.affected_books.push(DisplayBook { index, book });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::form::FormField;
    use crate::store::memory::fixtures::StorageFixture;

    #[test]
    fn adds_book_at_end() {
        let mut shelf = Shelf::open(StorageFixture::new().with_books(2).build()).unwrap();
        let mut form = BookForm::new()
            .with(FormField::Name, " Dune ")
            .with(FormField::Author, "Frank Herbert");

        let result = run(&mut shelf, &mut form).unwrap();
        assert_eq!(result.affected_books.len(), 1);
        assert_eq!(result.affected_books[0].index, DisplayIndex(3));
        assert_eq!(result.affected_books[0].book.name, "Dune");
        assert_eq!(result.total, 3);
        assert_eq!(shelf.books()[2].author.as_deref(), Some("Frank Herbert"));
    }

    #[test]
    fn invalid_form_writes_nothing() {
        let mut shelf = Shelf::open(StorageFixture::new().seeded().build()).unwrap();
        let mut form = BookForm::new().with(FormField::Author, "Nobody");

        let err = run(&mut shelf, &mut form).unwrap_err();
        assert!(matches!(err, ShelfError::Validation { field: "name", .. }));
        assert!(shelf.books().is_empty());
        assert_eq!(form.get(FormField::Author), "Nobody");
    }
}

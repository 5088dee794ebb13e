use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::BookSelector;
use crate::shelf::Shelf;
use crate::store::Storage;

use super::helpers::books_by_selectors;

pub fn run<S: Storage>(shelf: &Shelf<S>, selectors: &[BookSelector]) -> Result<CmdResult> {
    let books = books_by_selectors(shelf.books(), selectors)?;
    Ok(CmdResult::default()
        .with_listed_books(books)
        .with_total(shelf.books().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StorageFixture;

    #[test]
    fn views_by_index_and_id() {
        let storage = StorageFixture::new()
            .seeded()
            .with_book("Emma")
            .with_book("Dune")
            .build();
        let shelf = Shelf::open(storage).unwrap();
        let emma_id = shelf.books()[0].id.clone();

        let selectors = vec![
            BookSelector::Index(DisplayIndex(2)),
            BookSelector::Id(emma_id),
        ];
        let result = run(&shelf, &selectors).unwrap();
        let names: Vec<&str> = result
            .listed_books
            .iter()
            .map(|d| d.book.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dune", "Emma"]);
        assert_eq!(result.listed_books[1].index, DisplayIndex(1));
    }

    #[test]
    fn unknown_selectors_fail() {
        let shelf = Shelf::open(StorageFixture::new().with_books(1).build()).unwrap();

        let err = run(&shelf, &[BookSelector::Index(DisplayIndex(9))]).unwrap_err();
        assert!(matches!(err, ShelfError::Api(_)));

        let err = run(&shelf, &[BookSelector::Id("ghost".into())]).unwrap_err();
        assert!(matches!(err, ShelfError::BookNotFound(_)));
    }
}

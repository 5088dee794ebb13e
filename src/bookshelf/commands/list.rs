use crate::commands::CmdResult;
use crate::error::Result;
use crate::shelf::Shelf;
use crate::store::Storage;

/// Lists the books visible under the shelf's filter, replacing the filter
/// first when one is given.
pub fn run<S: Storage>(shelf: &mut Shelf<S>, filter: Option<String>) -> Result<CmdResult> {
    if let Some(text) = filter {
        shelf.set_filter(text);
    }

    Ok(CmdResult::default()
        .with_listed_books(shelf.filtered_indexed())
        .with_filter(shelf.filter())
        .with_total(shelf.books().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StorageFixture;

    fn shelf() -> Shelf<crate::store::memory::MemStorage> {
        let storage = StorageFixture::new()
            .seeded()
            .with_book("The Great Gatsby")
            .with_book("1984")
            .with_book("Great Expectations")
            .build();
        Shelf::open(storage).unwrap()
    }

    #[test]
    fn lists_everything_without_filter() {
        let mut shelf = shelf();
        let result = run(&mut shelf, None).unwrap();
        assert_eq!(result.listed_books.len(), 3);
        assert_eq!(result.total, 3);
        assert!(!result.filter_active());
    }

    #[test]
    fn filter_keeps_collection_indexes() {
        let mut shelf = shelf();
        let result = run(&mut shelf, Some("GREAT".into())).unwrap();

        let indexes: Vec<DisplayIndex> = result.listed_books.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![DisplayIndex(1), DisplayIndex(3)]);
        assert_eq!(result.total, 3);
        assert!(result.filter_active());
    }

    #[test]
    fn filter_persists_on_shelf_between_calls() {
        let mut shelf = shelf();
        run(&mut shelf, Some("1984".into())).unwrap();

        let result = run(&mut shelf, None).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.filter.as_deref(), Some("1984"));
    }

    #[test]
    fn no_match_is_empty_listing() {
        let mut shelf = shelf();
        let result = run(&mut shelf, Some("zzz".into())).unwrap();
        assert!(result.listed_books.is_empty());
        assert!(result.filter_active());
    }
}

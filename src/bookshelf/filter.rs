//! # Filtering
//!
//! The filtered view is a pure function of the book sequence and the filter
//! text. A filter that is blank after trimming matches everything; otherwise a
//! book matches when its name contains the filter text, compared in
//! lowercase. The filter is not trimmed for matching, so `"great "` only
//! matches names with a space after "great".
//!
//! [`FilteredView`] caches the matching positions. It never notices changes
//! on its own: whoever owns the inputs must call [`FilteredView::invalidate`]
//! after changing either of them.

use crate::model::Book;
use std::cell::RefCell;

/// The current free-text name filter. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    /// Replaces the filter text as given, without trimming.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_active(&self) -> bool {
        is_active(&self.text)
    }
}

/// Whether `filter` narrows the view at all.
pub fn is_active(filter: &str) -> bool {
    !filter.trim().is_empty()
}

/// Positions (into `books`) of the books matching `filter`, in order.
pub fn matching_positions(books: &[Book], filter: &str) -> Vec<usize> {
    if !is_active(filter) {
        return (0..books.len()).collect();
    }
    let needle = filter.to_lowercase();
    books
        .iter()
        .enumerate()
        .filter(|(_, b)| b.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// The books matching `filter`, in their original order.
pub fn filter_books<'a>(books: &'a [Book], filter: &str) -> Vec<&'a Book> {
    matching_positions(books, filter)
        .into_iter()
        .map(|i| &books[i])
        .collect()
}

/// A cached filtered view, recomputed lazily after invalidation.
#[derive(Debug, Default)]
pub struct FilteredView {
    positions: RefCell<Option<Vec<usize>>>,
}

impl FilteredView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        self.positions.borrow_mut().take();
    }

    pub fn is_cached(&self) -> bool {
        self.positions.borrow().is_some()
    }

    /// Matching positions, computing them if the cache is empty.
    pub fn positions(&self, books: &[Book], filter: &str) -> Vec<usize> {
        let mut slot = self.positions.borrow_mut();
        slot.get_or_insert_with(|| matching_positions(books, filter))
            .clone()
    }

    pub fn resolve<'a>(&self, books: &'a [Book], filter: &str) -> Vec<&'a Book> {
        self.positions(books, filter)
            .into_iter()
            .filter_map(|i| books.get(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookFields;

    fn books(names: &[&str]) -> Vec<Book> {
        names
            .iter()
            .map(|n| Book::new(BookFields::new(*n)))
            .collect()
    }

    fn names<'a>(view: &[&'a Book]) -> Vec<&'a str> {
        view.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let all = books(&["The Great Gatsby", "1984"]);
        let view = filter_books(&all, "great");
        assert_eq!(names(&view), vec!["The Great Gatsby"]);

        let view = filter_books(&all, "GATS");
        assert_eq!(names(&view), vec!["The Great Gatsby"]);
    }

    #[test]
    fn blank_filter_returns_everything_in_order() {
        let all = books(&["C", "A", "B"]);
        for filter in ["", "   ", "\t\n"] {
            let view = filter_books(&all, filter);
            assert_eq!(names(&view), vec!["C", "A", "B"]);
        }
    }

    #[test]
    fn preserves_relative_order() {
        let all = books(&["War and Peace", "Dracula", "The War of the Worlds"]);
        let view = filter_books(&all, "war");
        assert_eq!(names(&view), vec!["War and Peace", "The War of the Worlds"]);
    }

    #[test]
    fn filter_is_not_trimmed_for_matching() {
        let all = books(&["Moby-Dick", "Moby Dick"]);
        let view = filter_books(&all, "moby ");
        assert_eq!(names(&view), vec!["Moby Dick"]);
    }

    #[test]
    fn refiltering_is_idempotent() {
        let all = books(&["Brave New World", "New Grub Street", "Emma"]);
        let once: Vec<Book> = filter_books(&all, "new").into_iter().cloned().collect();
        let twice = filter_books(&once, "new");
        assert_eq!(names(&twice), vec!["Brave New World", "New Grub Street"]);
    }

    #[test]
    fn non_ascii_names_fold() {
        let all = books(&["Les Misérables", "Jane Eyre"]);
        let view = filter_books(&all, "MISÉR");
        assert_eq!(names(&view), vec!["Les Misérables"]);
    }

    #[test]
    fn no_match_is_empty() {
        let all = books(&["Emma"]);
        assert!(filter_books(&all, "zzz").is_empty());
        assert!(filter_books(&[], "zzz").is_empty());
    }

    #[test]
    fn filter_state_keeps_raw_text() {
        let mut state = FilterState::new();
        assert!(!state.is_active());
        state.set("  dune ");
        assert_eq!(state.get(), "  dune ");
        assert!(state.is_active());
    }

    #[test]
    fn view_caches_until_invalidated() {
        let mut all = books(&["Dune", "Emma"]);
        let view = FilteredView::new();
        assert!(!view.is_cached());

        assert_eq!(names(&view.resolve(&all, "d")), vec!["Dune"]);
        assert!(view.is_cached());

        all.push(Book::new(BookFields::new("Dubliners")));
        assert_eq!(names(&view.resolve(&all, "d")), vec!["Dune"]);

        view.invalidate();
        assert_eq!(names(&view.resolve(&all, "d")), vec!["Dune", "Dubliners"]);
    }
}

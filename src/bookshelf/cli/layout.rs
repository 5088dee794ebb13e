//! Responsive layout selection. The terminal width plays the part of the
//! viewport: `auto` shows cards on narrow terminals and a table on wide ones.

use bookshelf::config::LayoutPreference;

/// Fallback width when stdout is not a terminal.
pub const DEFAULT_WIDTH: usize = 80;

const TWO_CARDS_AT: usize = 60;
const FOUR_CARDS_AT: usize = 120;
pub const CARD_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    Table,
}

pub fn choose_layout(pref: LayoutPreference, width: usize, breakpoint: u16) -> Layout {
    match pref {
        LayoutPreference::Grid => Layout::Grid,
        LayoutPreference::Table => Layout::Table,
        LayoutPreference::Auto if width < breakpoint as usize => Layout::Grid,
        LayoutPreference::Auto => Layout::Table,
    }
}

/// Cards per row for a terminal `width` columns wide.
pub fn card_columns(width: usize) -> usize {
    if width >= FOUR_CARDS_AT {
        4
    } else if width >= TWO_CARDS_AT {
        2
    } else {
        1
    }
}

/// Width of one card when `columns` cards share `width`.
pub fn card_width(width: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    let gaps = CARD_GAP * (columns - 1);
    (width.saturating_sub(gaps) / columns).max(12)
}

/// Current terminal width, or [`DEFAULT_WIDTH`] when unknown.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_switches_at_breakpoint() {
        assert_eq!(choose_layout(LayoutPreference::Auto, 99, 100), Layout::Grid);
        assert_eq!(choose_layout(LayoutPreference::Auto, 100, 100), Layout::Table);
        assert_eq!(choose_layout(LayoutPreference::Auto, 200, 100), Layout::Table);
    }

    #[test]
    fn explicit_preference_ignores_width() {
        assert_eq!(choose_layout(LayoutPreference::Grid, 300, 100), Layout::Grid);
        assert_eq!(choose_layout(LayoutPreference::Table, 20, 100), Layout::Table);
    }

    #[test]
    fn card_columns_scale_with_width() {
        assert_eq!(card_columns(40), 1);
        assert_eq!(card_columns(60), 2);
        assert_eq!(card_columns(119), 2);
        assert_eq!(card_columns(160), 4);
    }

    #[test]
    fn card_width_leaves_gaps() {
        assert_eq!(card_width(80, 2), 39);
        assert_eq!(card_width(120, 4), 28);
        assert_eq!(card_width(10, 1), 12);
    }
}

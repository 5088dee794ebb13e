//! # Rendering
//!
//! Turns command results into terminal text. Layout math (column widths,
//! wrapping, truncation, padding) happens here, in Unicode display width;
//! templates only pick styles and print.
//!
//! Every public `render_*` has an internal twin taking `use_color: Option<bool>`
//! so tests can render plain text regardless of the terminal.

use super::layout::{card_columns, card_width, Layout, CARD_GAP};
use super::styles::names;
use super::templates::{
    render, render_with_color, CONFIG_TEMPLATE, FULL_BOOK_TEMPLATE, LIST_TEMPLATE,
    MESSAGES_TEMPLATE,
};
use bookshelf::api::{CmdMessage, CmdResult, MessageLevel};
use bookshelf::config::ShelfConfig;
use bookshelf::index::DisplayBook;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const HEADING: &str = "Book Collection";
pub const EMPTY_FILTERED: &str = "No books match your filter.";
pub const EMPTY_COLLECTION: &str = "No books have been added yet.";
pub const MISSING: &str = "-";

const CARD_DESCRIPTION_LINES: usize = 4;
const TABLE_DESCRIPTION_LINES: usize = 2;
const COLUMN_GAP: usize = 2;
const FIELD_LABEL_WIDTH: usize = 9;

/// How a book listing should be drawn.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub layout: Layout,
    pub width: usize,
    pub placeholder: String,
}

#[derive(Serialize, Clone)]
struct Cell {
    text: String,
    pad: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    heading: &'static str,
    filter_active: bool,
    filter_line: String,
    empty: bool,
    empty_message: &'static str,
    grid: bool,
    rows: Vec<Vec<Vec<Cell>>>,
    header: Vec<Cell>,
    rule: String,
    lines: Vec<Vec<Cell>>,
}

#[derive(Serialize)]
struct FieldData {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct FullBookEntry {
    index: String,
    name: String,
    fields: Vec<FieldData>,
    description: Vec<String>,
}

#[derive(Serialize)]
struct FullBookData {
    books: Vec<FullBookEntry>,
    rule: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn render_template<T: Serialize>(name: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(name, data, c),
        None => render(name, data),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// The message shown instead of a listing with no books in it.
pub fn empty_message(filter_active: bool) -> &'static str {
    if filter_active {
        EMPTY_FILTERED
    } else {
        EMPTY_COLLECTION
    }
}

/// Renders the books listed in `result` as cards or a table.
pub fn render_book_list(result: &CmdResult, opts: &ListOptions) -> String {
    render_book_list_internal(result, opts, None)
}

pub(super) fn render_book_list_internal(
    result: &CmdResult,
    opts: &ListOptions,
    use_color: Option<bool>,
) -> String {
    let books = &result.listed_books;
    let filter_active = result.filter_active();
    let filter_line = match &result.filter {
        Some(filter) if filter_active => format!(
            "Filter: \"{}\" ({} of {})",
            filter,
            books.len(),
            result.total
        ),
        _ => String::new(),
    };

    let mut data = ListData {
        heading: HEADING,
        filter_active,
        filter_line,
        empty: books.is_empty(),
        empty_message: empty_message(filter_active),
        grid: opts.layout == Layout::Grid,
        rows: Vec::new(),
        header: Vec::new(),
        rule: String::new(),
        lines: Vec::new(),
    };

    if !books.is_empty() {
        match opts.layout {
            Layout::Grid => data.rows = grid_rows(books, opts.width, &opts.placeholder),
            Layout::Table => {
                let (header, rule, lines) = table_lines(books, opts.width);
                data.header = header;
                data.rule = rule;
                data.lines = lines;
            }
        }
    }

    render_template(LIST_TEMPLATE, &data, use_color)
}

fn card_lines(db: &DisplayBook, width: usize, placeholder: &str) -> Vec<(String, &'static str)> {
    let book = &db.book;
    let mut lines = Vec::new();

    match &book.picture {
        Some(url) => lines.push((truncate_to_width(url, width), names::MUTED)),
        None => lines.push((
            truncate_to_width(&format!("[{}]", placeholder), width),
            names::PLACEHOLDER,
        )),
    }
    lines.push((
        truncate_to_width(&format!("{}. {}", db.index, book.name), width),
        names::TITLE,
    ));
    if let Some(author) = &book.author {
        lines.push((
            truncate_to_width(&format!("by {}", author), width),
            names::AUTHOR,
        ));
    }
    if let Some(description) = &book.description {
        for line in clamp_lines(wrap_text(description, width), CARD_DESCRIPTION_LINES, width) {
            lines.push((line, names::TEXT));
        }
    }
    lines
}

fn grid_rows(books: &[DisplayBook], width: usize, placeholder: &str) -> Vec<Vec<Vec<Cell>>> {
    let columns = card_columns(width);
    let card_w = card_width(width, columns);

    books
        .chunks(columns)
        .map(|chunk| {
            let cards: Vec<Vec<(String, &'static str)>> = chunk
                .iter()
                .map(|db| card_lines(db, card_w, placeholder))
                .collect();
            let height = cards.iter().map(Vec::len).max().unwrap_or(0);

            (0..height)
                .map(|i| {
                    cards
                        .iter()
                        .enumerate()
                        .map(|(c, card)| {
                            let (text, style) = card
                                .get(i)
                                .cloned()
                                .unwrap_or_else(|| (String::new(), names::TEXT));
                            let pad = if c + 1 == cards.len() {
                                String::new()
                            } else {
                                " ".repeat(card_w.saturating_sub(text.width()) + CARD_GAP)
                            };
                            Cell { text, pad, style }
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

fn table_lines(books: &[DisplayBook], width: usize) -> (Vec<Cell>, String, Vec<Vec<Cell>>) {
    let index_w = books
        .iter()
        .map(|db| db.index.to_string().width())
        .max()
        .unwrap_or(1)
        .max(1);
    let remaining = width.saturating_sub(index_w + 3 * COLUMN_GAP).max(24);
    let title_w = remaining * 35 / 100;
    let author_w = remaining * 20 / 100;
    let desc_w = remaining - title_w - author_w;
    let widths = [index_w, title_w, author_w, desc_w];

    let header = row_cells(
        &widths,
        [
            ("#".to_string(), names::HEADER),
            ("Title".to_string(), names::HEADER),
            ("Author".to_string(), names::HEADER),
            ("Description".to_string(), names::HEADER),
        ],
    );
    let rule = "─".repeat(widths.iter().sum::<usize>() + 3 * COLUMN_GAP);

    let mut lines = Vec::new();
    for db in books {
        let book = &db.book;
        let author = match &book.author {
            Some(a) => (truncate_to_width(a, author_w), names::AUTHOR),
            None => (MISSING.to_string(), names::MUTED),
        };
        let description = match &book.description {
            Some(d) => clamp_lines(wrap_text(d, desc_w), TABLE_DESCRIPTION_LINES, desc_w),
            None => vec![MISSING.to_string()],
        };
        let desc_style = if book.description.is_some() {
            names::TEXT
        } else {
            names::MUTED
        };

        let mut description = description.into_iter();
        let first = description.next().unwrap_or_default();
        lines.push(row_cells(
            &widths,
            [
                (db.index.to_string(), names::INDEX),
                (truncate_to_width(&book.name, title_w), names::TITLE),
                author,
                (first, desc_style),
            ],
        ));
        for more in description {
            lines.push(row_cells(
                &widths,
                [
                    (String::new(), names::TEXT),
                    (String::new(), names::TEXT),
                    (String::new(), names::TEXT),
                    (more, desc_style),
                ],
            ));
        }
    }

    (header, rule, lines)
}

fn row_cells(widths: &[usize; 4], cells: [(String, &'static str); 4]) -> Vec<Cell> {
    cells
        .into_iter()
        .enumerate()
        .map(|(i, (text, style))| {
            let pad = if i + 1 == widths.len() {
                String::new()
            } else {
                " ".repeat(widths[i].saturating_sub(text.width()) + COLUMN_GAP)
            };
            Cell { text, pad, style }
        })
        .collect()
}

/// Renders every detail of each book, for `view`.
pub fn render_full_books(books: &[DisplayBook], width: usize, placeholder: &str) -> String {
    render_full_books_internal(books, width, placeholder, None)
}

pub(super) fn render_full_books_internal(
    books: &[DisplayBook],
    width: usize,
    placeholder: &str,
    use_color: Option<bool>,
) -> String {
    let text_w = width.saturating_sub(3).max(20);
    let entries = books
        .iter()
        .map(|db| {
            let book = &db.book;
            let field = |label: &str, value: Option<&String>, fallback: &str, style| {
                let (value, style) = match value {
                    Some(v) => (v.clone(), style),
                    None => (fallback.to_string(), names::MUTED),
                };
                FieldData {
                    label: format!("{:<w$}", format!("{}:", label), w = FIELD_LABEL_WIDTH),
                    value,
                    style,
                }
            };
            let mut fields = vec![
                field("Author", book.author.as_ref(), MISSING, names::AUTHOR),
                field("Cover", book.picture.as_ref(), placeholder, names::TEXT),
                field("Id", Some(&book.id), MISSING, names::MUTED),
            ];
            if book.picture.is_none() {
                fields[1].style = names::PLACEHOLDER;
            }

            FullBookEntry {
                index: format!("{}.", db.index),
                name: book.name.clone(),
                fields,
                description: book
                    .description
                    .as_deref()
                    .map(|d| wrap_text(d, text_w))
                    .unwrap_or_default(),
            }
        })
        .collect();

    let data = FullBookData {
        books: entries,
        rule: "─".repeat(width.min(40)),
    };
    render_template(FULL_BOOK_TEMPLATE, &data, use_color)
}

/// Renders command messages with their level's style.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

pub(super) fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };
    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_config(config: &ShelfConfig) -> String {
    render_config_internal(config, None)
}

fn render_config_internal(config: &ShelfConfig, use_color: Option<bool>) -> String {
    let data = ConfigData {
        entries: config
            .list_all()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let word_w = word.width();
            let needed = if line.is_empty() { word_w } else { line_w + 1 + word_w };
            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&word);
                line_w = needed;
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
                continue;
            }
            // Word alone is too wide: split it at the width
            let (head, tail) = split_at_width(&word, width);
            lines.push(head);
            word = tail;
            if word.is_empty() {
                break;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn split_at_width(s: &str, width: usize) -> (String, String) {
    let mut head = String::new();
    let mut head_w = 0;
    let mut chars = s.chars().peekable();
    while let Some(&c) = chars.peek() {
        let w = c.width().unwrap_or(0);
        if head_w + w > width && !head.is_empty() {
            break;
        }
        head.push(c);
        head_w += w;
        chars.next();
    }
    (head, chars.collect())
}

/// Keeps at most `max` lines, marking the cut with an ellipsis.
fn clamp_lines(mut lines: Vec<String>, max: usize, width: usize) -> Vec<String> {
    if lines.len() <= max {
        return lines;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        let mut text = truncate_to_width(last, width.saturating_sub(1));
        if !text.ends_with('…') {
            text.push('…');
        }
        *last = text;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::index::DisplayIndex;
    use bookshelf::model::{Book, BookFields};

    fn display(index: usize, fields: BookFields) -> DisplayBook {
        DisplayBook {
            index: DisplayIndex(index),
            book: Book::new(fields),
        }
    }

    fn sample() -> Vec<DisplayBook> {
        vec![
            display(
                1,
                BookFields::new("Dune")
                    .with_author("Frank Herbert")
                    .with_description("Politics and sandworms on a desert planet.")
                    .with_picture("https://example.com/dune.jpg"),
            ),
            display(2, BookFields::new("Untitled Draft")),
        ]
    }

    fn listing(books: Vec<DisplayBook>, filter: Option<&str>, total: usize) -> CmdResult {
        let mut result = CmdResult::default()
            .with_listed_books(books)
            .with_total(total);
        if let Some(f) = filter {
            result = result.with_filter(f);
        }
        result
    }

    fn opts(layout: Layout, width: usize) -> ListOptions {
        ListOptions {
            layout,
            width,
            placeholder: "No Image".to_string(),
        }
    }

    #[test]
    fn empty_collection_message() {
        let result = listing(vec![], None, 0);
        let out = render_book_list_internal(&result, &opts(Layout::Grid, 80), Some(false));
        assert!(out.starts_with("Book Collection\n"));
        assert!(out.contains(EMPTY_COLLECTION));
        assert!(!out.contains(EMPTY_FILTERED));
    }

    #[test]
    fn empty_filtered_message() {
        let result = listing(vec![], Some("zzz"), 5);
        let out = render_book_list_internal(&result, &opts(Layout::Table, 120), Some(false));
        assert!(out.contains(EMPTY_FILTERED));
        assert!(out.contains("Filter: \"zzz\" (0 of 5)"));
    }

    #[test]
    fn blank_filter_counts_as_no_filter() {
        let result = listing(vec![], Some("   "), 0);
        let out = render_book_list_internal(&result, &opts(Layout::Grid, 80), Some(false));
        assert!(out.contains(EMPTY_COLLECTION));
        assert!(!out.contains("Filter:"));
    }

    #[test]
    fn grid_shows_cards_with_placeholder() {
        let result = listing(sample(), None, 2);
        let out = render_book_list_internal(&result, &opts(Layout::Grid, 80), Some(false));

        assert!(out.contains("1. Dune"));
        assert!(out.contains("by Frank Herbert"));
        assert!(out.contains("https://example.com/dune.jpg"));
        assert!(out.contains("[No Image]"));
        assert!(out.contains("2. Untitled Draft"));
        // Two cards share a row at 80 columns
        let title_line = out.lines().find(|l| l.contains("1. Dune")).unwrap();
        assert!(title_line.contains("2. Untitled Draft"));
    }

    #[test]
    fn narrow_grid_stacks_cards() {
        let result = listing(sample(), None, 2);
        let out = render_book_list_internal(&result, &opts(Layout::Grid, 40), Some(false));
        let title_line = out.lines().find(|l| l.contains("1. Dune")).unwrap();
        assert!(!title_line.contains("Untitled"));
    }

    #[test]
    fn table_uses_dash_for_missing_values() {
        let result = listing(sample(), None, 2);
        let out = render_book_list_internal(&result, &opts(Layout::Table, 100), Some(false));

        let header = out.lines().nth(2).unwrap();
        assert!(header.starts_with("#"));
        assert!(header.contains("Title"));
        assert!(header.contains("Author"));
        assert!(header.contains("Description"));

        let row = out.lines().find(|l| l.contains("Untitled Draft")).unwrap();
        assert_eq!(row.matches(" - ").count() + row.ends_with(" -") as usize, 2);
    }

    #[test]
    fn full_view_lists_fields() {
        let out = render_full_books_internal(&sample(), 80, "No Image", Some(false));
        assert!(out.contains("1. Dune"));
        assert!(out.contains("Author:   Frank Herbert"));
        assert!(out.contains("Cover:    No Image"));
        assert!(out.contains("Politics and sandworms"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let out = render_messages_internal(
            &[CmdMessage::success("Added"), CmdMessage::error("Nope")],
            Some(false),
        );
        assert_eq!(out, "Added\nNope\n");
    }

    #[test]
    fn config_lists_keys() {
        let out = render_config_internal(&ShelfConfig::default(), Some(false));
        assert_eq!(out, "layout = auto\nbreakpoint = 100\nplaceholder = No Image\n");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn wrap_breaks_on_words_and_splits_long_words() {
        assert_eq!(wrap_text("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn clamp_marks_cut_lines() {
        let lines = clamp_lines(vec!["one".into(), "two".into(), "three".into()], 2, 10);
        assert_eq!(lines, vec!["one".to_string(), "two…".to_string()]);
    }
}

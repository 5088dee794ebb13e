//! # Browse session
//!
//! An interactive, line-driven view over one [`Shelf`] kept open for the whole
//! session. It stands in for a page that stays loaded: the filter lives only
//! as long as the session, and the listing is redrawn whenever the shelf
//! reports a change through its subscription.
//!
//! | Input | Effect |
//! |-------|--------|
//! | `/text` | Set the filter to `text` (`/` alone clears it) |
//! | `add` | Fill in the book form field by field |
//! | `rm N...` | Delete books, confirming each one |
//! | `view N...` | Show every detail of some books |
//! | `grid`, `table` | Switch the layout |
//! | empty line | Redraw |
//! | `help` | List commands |
//! | `q` | Quit |
//!
//! [`Shelf`]: bookshelf::shelf::Shelf

use super::layout::Layout;
use super::prompt::{confirm, delete_question, read_line};
use super::render::{
    render_book_list_internal, render_full_books_internal, render_messages_internal, ListOptions,
};
use bookshelf::api::{CmdMessage, ShelfApi};
use bookshelf::error::{Result, ShelfError};
use bookshelf::form::{BookForm, FormField, DESCRIPTION_LIMIT};
use bookshelf::shelf::SubscriptionId;
use bookshelf::store::Storage;
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Entered at any form prompt to abandon the form.
pub const CANCEL: &str = ".";

const HELP: &str = "\
Commands:
  /text        filter books by name (/ clears the filter)
  add          add a book (enter . to cancel)
  rm N...      delete books by index or id
  view N...    show book details
  grid, table  switch layout
  q            quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Filter(String),
    Add,
    Remove(Vec<String>),
    View(Vec<String>),
    Layout(Layout),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> BrowseCommand {
    if let Some(filter) = line.strip_prefix('/') {
        return BrowseCommand::Filter(filter.to_string());
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return BrowseCommand::Refresh;
    };
    let rest: Vec<String> = words.map(str::to_string).collect();

    match head.to_lowercase().as_str() {
        "add" | "a" => BrowseCommand::Add,
        "rm" | "delete" => BrowseCommand::Remove(rest),
        "view" | "v" => BrowseCommand::View(rest),
        "grid" => BrowseCommand::Layout(Layout::Grid),
        "table" => BrowseCommand::Layout(Layout::Table),
        "help" | "?" => BrowseCommand::Help,
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(line.trim().to_string()),
    }
}

pub struct BrowseSession<'a, S: Storage, R: BufRead, W: Write> {
    api: &'a mut ShelfApi<S>,
    input: R,
    output: W,
    opts: ListOptions,
    use_color: Option<bool>,
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl<'a, S: Storage, R: BufRead, W: Write> BrowseSession<'a, S, R, W> {
    pub fn new(api: &'a mut ShelfApi<S>, input: R, output: W, opts: ListOptions) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let subscription = api.shelf_mut().subscribe(move |_| flag.set(true));

        Self {
            api,
            input,
            output,
            opts,
            use_color: None,
            dirty,
            subscription,
        }
    }

    /// Forces styling on or off instead of following the terminal.
    #[cfg(test)]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = Some(use_color);
        self
    }

    pub fn run(mut self) -> Result<()> {
        self.render_list()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = read_line(&mut self.input)? else {
                writeln!(self.output)?;
                break;
            };

            match parse_command(&line) {
                BrowseCommand::Quit => break,
                BrowseCommand::Filter(text) => {
                    tracing::debug!(filter = %text, "browse filter");
                    self.api.shelf_mut().set_filter(text);
                }
                BrowseCommand::Add => self.add_flow()?,
                BrowseCommand::Remove(selectors) => self.remove_flow(&selectors)?,
                BrowseCommand::View(selectors) => self.view(&selectors)?,
                BrowseCommand::Layout(layout) => {
                    if self.opts.layout != layout {
                        self.opts.layout = layout;
                        self.dirty.set(true);
                    }
                }
                BrowseCommand::Refresh => self.dirty.set(true),
                BrowseCommand::Help => write!(self.output, "{}", HELP)?,
                BrowseCommand::Unknown(input) => self.print(&[CmdMessage::error(format!(
                    "Unknown command: {} (type help for a list)",
                    input
                ))])?,
            }

            if self.dirty.replace(false) {
                self.render_list()?;
            }
        }

        self.api.shelf_mut().unsubscribe(self.subscription);
        Ok(())
    }

    fn render_list(&mut self) -> Result<()> {
        let result = self.api.list_books(None)?;
        let out = render_book_list_internal(&result, &self.opts, self.use_color);
        write!(self.output, "{}", out)?;
        Ok(())
    }

    fn print(&mut self, messages: &[CmdMessage]) -> Result<()> {
        write!(self.output, "{}", render_messages_internal(messages, self.use_color))?;
        Ok(())
    }

    /// Prompts for one form field. `None` means the user cancelled.
    fn ask(&mut self, field: FormField) -> Result<Option<String>> {
        write!(self.output, "{}: ", field.label())?;
        self.output.flush()?;
        Ok(read_line(&mut self.input)?.filter(|value| value.trim() != CANCEL))
    }

    fn add_flow(&mut self) -> Result<()> {
        let mut form = BookForm::new();
        for field in FormField::all() {
            let Some(value) = self.ask(*field)? else {
                return self.print(&[CmdMessage::info("Add cancelled.")]);
            };
            if form.set(*field, &value) {
                self.print(&[CmdMessage::warning(format!(
                    "Description truncated to {} characters",
                    DESCRIPTION_LIMIT
                ))])?;
            }
        }

        loop {
            match self.api.add_book(&mut form) {
                Ok(result) => return self.print(&result.messages),
                Err(ShelfError::Validation { field, message }) => {
                    self.print(&[CmdMessage::error(message)])?;
                    let field = FormField::all()
                        .iter()
                        .copied()
                        .find(|f| f.key() == field)
                        .unwrap_or(FormField::Name);
                    let Some(value) = self.ask(field)? else {
                        return self.print(&[CmdMessage::info("Add cancelled.")]);
                    };
                    form.set(field, &value);
                }
                Err(e) => return self.print(&[CmdMessage::error(e.to_string())]),
            }
        }
    }

    fn remove_flow(&mut self, selectors: &[String]) -> Result<()> {
        if selectors.is_empty() {
            return self.print(&[CmdMessage::error("Usage: rm <INDEX|ID>...")]);
        }
        let targets = match self.api.delete_targets(selectors) {
            Ok(targets) => targets,
            Err(e) => return self.print(&[CmdMessage::error(e.to_string())]),
        };
        if targets.is_empty() {
            return self.print(&[CmdMessage::info("Nothing to delete.")]);
        }

        let mut confirmed = Vec::new();
        for target in &targets {
            let question = delete_question(&target.book.name);
            if confirm(&mut self.input, &mut self.output, &question)? {
                confirmed.push(target.book.id.clone());
            } else {
                self.print(&[CmdMessage::info(format!("Kept: {}", target.book.name))])?;
            }
        }
        if confirmed.is_empty() {
            return Ok(());
        }

        match self.api.delete_by_ids(&confirmed) {
            Ok(result) => self.print(&result.messages),
            Err(e) => self.print(&[CmdMessage::error(e.to_string())]),
        }
    }

    fn view(&mut self, selectors: &[String]) -> Result<()> {
        match self.api.view_books(selectors) {
            Ok(result) => {
                let out = render_full_books_internal(
                    &result.listed_books,
                    self.opts.width,
                    &self.opts.placeholder,
                    self.use_color,
                );
                write!(self.output, "{}", out)?;
                Ok(())
            }
            Err(e) => self.print(&[CmdMessage::error(e.to_string())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::api::ShelfPaths;
    use bookshelf::book_store::{BOOKS_KEY, SEED_KEY};
    use bookshelf::model::{Book, BookFields};
    use bookshelf::store::memory::MemStorage;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn api(names: &[&str]) -> ShelfApi<MemStorage> {
        let books: Vec<Book> = names
            .iter()
            .map(|n| Book::new(BookFields::new(*n)))
            .collect();
        let storage = MemStorage::new()
            .with_item(BOOKS_KEY, &serde_json::to_string(&books).unwrap())
            .with_item(SEED_KEY, "true");
        let paths = ShelfPaths {
            data_dir: PathBuf::from("/unused"),
        };
        ShelfApi::open(storage, paths).unwrap()
    }

    fn session(api: &mut ShelfApi<MemStorage>, script: &str) -> String {
        let mut output = Vec::new();
        let opts = ListOptions {
            layout: Layout::Table,
            width: 100,
            placeholder: "No Image".to_string(),
        };
        BrowseSession::new(api, Cursor::new(script.as_bytes().to_vec()), &mut output, opts)
            .with_color(false)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("/Great "), BrowseCommand::Filter("Great ".into()));
        assert_eq!(parse_command("/"), BrowseCommand::Filter(String::new()));
        assert_eq!(parse_command("  "), BrowseCommand::Refresh);
        assert_eq!(
            parse_command("rm 1 2"),
            BrowseCommand::Remove(vec!["1".into(), "2".into()])
        );
        assert_eq!(parse_command("TABLE"), BrowseCommand::Layout(Layout::Table));
        assert_eq!(parse_command("q"), BrowseCommand::Quit);
        assert_eq!(
            parse_command("dance"),
            BrowseCommand::Unknown("dance".into())
        );
    }

    #[test]
    fn filter_redraws_listing() {
        let mut api = api(&["Emma", "Dune"]);
        let out = session(&mut api, "/dun\nq\n");

        assert!(out.contains("Filter: \"dun\" (1 of 2)"));
        assert_eq!(api.shelf().filter(), "dun");
    }

    #[test]
    fn filter_with_no_match_shows_message() {
        let mut api = api(&["Emma"]);
        let out = session(&mut api, "/zzz\nq\n");
        assert!(out.contains("No books match your filter."));
    }

    #[test]
    fn add_retries_name_until_valid() {
        let mut api = api(&[]);
        let out = session(&mut api, "add\n  \nFrank Herbert\n\n\nDune\nq\n");

        assert!(out.contains("Book name is required"));
        assert!(out.contains("Book added (1): Dune"));
        let book = &api.shelf().books()[0];
        assert_eq!(book.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(book.description, None);
    }

    #[test]
    fn add_can_be_cancelled() {
        let mut api = api(&[]);
        let out = session(&mut api, "add\n.\nq\n");
        assert!(out.contains("Add cancelled."));
        assert!(api.shelf().books().is_empty());
    }

    #[test]
    fn remove_requires_confirmation() {
        let mut api = api(&["Emma", "Dune"]);
        let out = session(&mut api, "rm 1\nn\nrm 2\ny\nq\n");

        assert!(out.contains("Are you sure you want to delete Emma?"));
        assert!(out.contains("Kept: Emma"));
        assert!(out.contains("Book deleted (2): Dune"));
        let names: Vec<&str> = api.shelf().books().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Emma"]);
    }

    #[test]
    fn remove_keeps_numeric_ids_as_ids() {
        let storage = MemStorage::new()
            .with_item(
                BOOKS_KEY,
                r#"[{"id":"2","name":"Emma"},{"id":"x","name":"Dune"}]"#,
            )
            .with_item(SEED_KEY, "true");
        let paths = ShelfPaths {
            data_dir: PathBuf::from("/unused"),
        };
        let mut api = ShelfApi::open(storage, paths).unwrap();

        let out = session(&mut api, "rm 1
y
q
");

        assert!(out.contains("Book deleted (1): Emma"));
        let names: Vec<&str> = api.shelf().books().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Dune"]);
    }

    #[test]
    fn errors_do_not_end_session() {
        let mut api = api(&["Emma"]);
        let out = session(&mut api, "rm 9\nview 1\nq\n");
        assert!(out.contains("Index 9 not found"));
        assert!(out.contains("Author:"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut api = api(&["Emma"]);
        let out = session(&mut api, "");
        assert!(out.starts_with("Book Collection\n"));
        assert!(out.ends_with("> \n"));
    }
}

//! # CLI Layer
//!
//! One possible front end for the bookshelf library, and the only place that
//! touches the terminal: argument parsing, stdin prompts, stdout rendering
//! and exit codes. Everything else goes through [`ShelfApi`].
//!
//! - `run()`: parses arguments, sets up logging and the context, dispatches
//! - `handle_*()`: call the API and render what comes back

use super::browse::BrowseSession;
use super::layout::{choose_layout, terminal_width, Layout};
use super::prompt::{confirm, delete_question};
use super::render::{
    print_messages, render_book_list, render_config, render_full_books, ListOptions,
};
use super::setup::{Cli, Commands, LayoutArgs};
use bookshelf::api::{CmdMessage, ConfigAction, ShelfApi};
use bookshelf::config::ShelfConfig;
use bookshelf::error::Result;
use bookshelf::init::initialize;
use bookshelf::store::fs::FileStorage;
use bookshelf::telemetry;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

struct AppContext {
    api: ShelfApi<FileStorage>,
    data_dir: PathBuf,
}

impl AppContext {
    /// Display settings are read only by the commands that draw books, so a
    /// broken `config.json` leaves add, delete and config itself usable.
    fn list_options(&self, args: LayoutArgs) -> Result<ListOptions> {
        let config = ShelfConfig::load(&self.data_dir)?;
        let width = terminal_width();
        Ok(ListOptions {
            layout: resolve_layout(args, &config, width),
            width,
            placeholder: config.placeholder,
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let ctx = initialize(cli.home)?;
    let mut ctx = AppContext {
        api: ctx.api,
        data_dir: ctx.data_dir,
    };

    match cli.command {
        Some(Commands::Add {
            name,
            author,
            description,
            picture,
        }) => handle_add(&mut ctx, name.join(" "), author, description, picture),
        Some(Commands::List { filter, layout }) => handle_list(&mut ctx, filter, layout),
        Some(Commands::View { selectors }) => handle_view(&mut ctx, selectors),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Browse { layout }) => handle_browse(&mut ctx, layout),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, Vec::new(), LayoutArgs::default()),
    }
}

fn resolve_layout(args: LayoutArgs, config: &ShelfConfig, width: usize) -> Layout {
    if args.grid {
        Layout::Grid
    } else if args.table {
        Layout::Table
    } else {
        choose_layout(config.layout, width, config.breakpoint)
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    author: Option<String>,
    description: Option<String>,
    picture: Option<String>,
) -> Result<()> {
    let result = ctx.api.create_book(name, author, description, picture)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Vec<String>, layout: LayoutArgs) -> Result<()> {
    let filter = if filter.is_empty() {
        None
    } else {
        Some(filter.join(" "))
    };
    let result = ctx.api.list_books(filter)?;
    print!("{}", render_book_list(&result, &ctx.list_options(layout)?));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_books(&selectors)?;
    let opts = ctx.list_options(LayoutArgs::default())?;
    print!(
        "{}",
        render_full_books(&result.listed_books, opts.width, &opts.placeholder)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if yes {
        let result = ctx.api.delete_books(&selectors)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let targets = ctx.api.delete_targets(&selectors)?;
    if targets.is_empty() {
        print_messages(&[CmdMessage::info("Nothing to delete.")]);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut confirmed = Vec::new();
    for target in &targets {
        if confirm(&mut input, &mut output, &delete_question(&target.book.name))? {
            confirmed.push(target.book.id.clone());
        }
    }
    output.flush()?;

    if confirmed.is_empty() {
        print_messages(&[CmdMessage::info("Deletion cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.delete_by_ids(&confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_browse(ctx: &mut AppContext, layout: LayoutArgs) -> Result<()> {
    let opts = ctx.list_options(layout)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    BrowseSession::new(&mut ctx.api, stdin.lock(), stdout.lock(), opts).run()
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::config::LayoutPreference;

    #[test]
    fn flags_override_configured_layout() {
        let config = ShelfConfig {
            layout: LayoutPreference::Table,
            ..ShelfConfig::default()
        };
        let grid = LayoutArgs {
            grid: true,
            table: false,
        };
        assert_eq!(resolve_layout(grid, &config, 200), Layout::Grid);
        assert_eq!(
            resolve_layout(LayoutArgs::default(), &config, 40),
            Layout::Table
        );
    }

    #[test]
    fn auto_layout_uses_breakpoint() {
        let config = ShelfConfig {
            breakpoint: 90,
            ..ShelfConfig::default()
        };
        assert_eq!(
            resolve_layout(LayoutArgs::default(), &config, 89),
            Layout::Grid
        );
        assert_eq!(
            resolve_layout(LayoutArgs::default(), &config, 90),
            Layout::Table
        );
    }
}

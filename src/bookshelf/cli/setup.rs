use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Keep track of the books on your shelf", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $BOOKSHELF_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Default, Clone, Copy)]
#[group(multiple = false)]
pub struct LayoutArgs {
    /// Show books as cards
    #[arg(long)]
    pub grid: bool,

    /// Show books as a table
    #[arg(long)]
    pub table: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Book name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(long)]
        author: Option<String>,

        /// At most 300 characters; longer text is cut
        #[arg(long)]
        description: Option<String>,

        /// Cover image URL
        #[arg(long, value_name = "URL")]
        picture: Option<String>,
    },

    /// List books, optionally filtered by name
    #[command(alias = "ls", display_order = 2)]
    List {
        #[arg(num_args = 0..)]
        filter: Vec<String>,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show every detail of some books
    #[command(alias = "v", display_order = 3)]
    View {
        /// Display indexes or ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete books
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Display indexes or ids
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Browse interactively
    #[command(display_order = 5)]
    Browse {
        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show or change display settings
    #[command(display_order = 6)]
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bookshelf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_means_list() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn add_collects_name_words() {
        let cli = parse(&["add", "The", "Great", "Gatsby", "--author", "F. Scott Fitzgerald"]);
        match cli.command {
            Some(Commands::Add { name, author, .. }) => {
                assert_eq!(name.join(" "), "The Great Gatsby");
                assert_eq!(author.as_deref(), Some("F. Scott Fitzgerald"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = parse(&["rm", "3", "-y", "-vv", "--home", "/tmp/shelf"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/shelf")));
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }

    #[test]
    fn grid_and_table_conflict() {
        let result = Cli::try_parse_from(["bookshelf", "ls", "--grid", "--table"]);
        assert!(result.is_err());
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["bookshelf", "add"]).is_err());
    }
}

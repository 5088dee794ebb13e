//! # Bookshelf CLI
//!
//! The binary is intentionally thin: the terminal client lives in `cli/`, and
//! this file only invokes `cli::run()` and turns an error into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Line prompts. Generic over the reader and writer so tests can script them.

use std::io::{self, BufRead, Write};

/// The question asked before a book is deleted.
pub fn delete_question(name: &str) -> String {
    format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        name
    )
}

/// Reads one line, without its line ending. `None` on end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Asks a yes/no question. Only `y` or `yes` (any case) confirms; anything
/// else, including end of input, declines.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

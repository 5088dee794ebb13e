//! # Templates
//!
//! Terminal output is rendered from minijinja templates kept in
//! `templates/*.jinja` and compiled into the binary. Layout math (widths,
//! wrapping, padding) is done in Rust before rendering; templates only decide
//! what is printed and which named style applies, through the `style` filter:
//!
//! ```text
//! {{ book.name | style("title") }}
//! ```
//!
//! Templates are loaded with `trim_blocks` and `lstrip_blocks`, so a line
//! holding only a block tag produces no output. A line break in the output
//! needs a line of its own in the template.

use super::styles::SHELF_THEME;
use minijinja::{Environment, Error, Value};
use serde::Serialize;

pub const LIST_TEMPLATE: &str = "list";
pub const FULL_BOOK_TEMPLATE: &str = "full_book";
pub const MESSAGES_TEMPLATE: &str = "messages";
pub const CONFIG_TEMPLATE: &str = "config";

const SOURCES: &[(&str, &str)] = &[
    (LIST_TEMPLATE, include_str!("templates/list.jinja")),
    (FULL_BOOK_TEMPLATE, include_str!("templates/full_book.jinja")),
    (MESSAGES_TEMPLATE, include_str!("templates/messages.jinja")),
    (CONFIG_TEMPLATE, include_str!("templates/config.jinja")),
];

fn environment(use_color: bool) -> Result<Environment<'static>, Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        SHELF_THEME.apply(&name, &value.to_string(), use_color)
    });
    for &(name, source) in SOURCES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Renders the named template, with ANSI styling only if `use_color`.
pub fn render_with_color<T: Serialize>(
    name: &str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let env = environment(use_color)?;
    env.get_template(name)?.render(data)
}

/// Renders the named template, styling when the terminal supports it.
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String, Error> {
    render_with_color(name, data, console::colors_enabled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Entry {
        key: String,
        value: String,
    }

    #[derive(Serialize)]
    struct Data {
        entries: Vec<Entry>,
    }

    #[test]
    fn all_templates_compile() {
        assert!(environment(false).is_ok());
    }

    #[test]
    fn block_lines_produce_no_output() {
        let data = Data {
            entries: vec![
                Entry {
                    key: "layout".into(),
                    value: "grid".into(),
                },
                Entry {
                    key: "breakpoint".into(),
                    value: "100".into(),
                },
            ],
        };
        let out = render_with_color(CONFIG_TEMPLATE, &data, false).unwrap();
        assert_eq!(out, "layout = grid\nbreakpoint = 100\n");
    }
}

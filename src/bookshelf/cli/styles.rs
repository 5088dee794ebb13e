//! Named terminal styles. Templates refer to styles by name through the
//! `style` filter; the names live in [`names`] so renderers and templates
//! agree on them.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is unknown, to catch template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADING: &str = "heading";
    pub const TEXT: &str = "text";
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const MUTED: &str = "muted";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const BORDER: &str = "border";
    pub const HEADER: &str = "header";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const PROMPT: &str = "prompt";
}

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADING, Style::new().bold().underlined())
        .add(names::TEXT, Style::new())
        .add(names::INDEX, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::AUTHOR, Style::new().italic())
        .add(names::MUTED, Style::new().color256(245))
        .add(names::PLACEHOLDER, Style::new().color256(245).italic())
        .add(names::BORDER, Style::new().color256(240))
        .add(names::HEADER, Style::new().bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().color256(245))
        .add(names::PROMPT, Style::new().cyan())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escapes() {
        let out = SHELF_THEME.apply(names::TITLE, "Dune", false);
        assert_eq!(out, "Dune");
    }

    #[test]
    fn colored_output_wraps_text() {
        let out = SHELF_THEME.apply(names::ERROR, "boom", true);
        assert!(out.contains("boom"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn unknown_style_is_flagged() {
        let out = SHELF_THEME.apply("nope", "x", false);
        assert_eq!(out, "(!?) x");
    }
}

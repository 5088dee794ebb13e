mod browse;
mod commands;
mod layout;
mod prompt;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;

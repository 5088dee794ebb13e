//! Display settings: show them all, read one key, or change one.
//!
//! Unknown keys and rejected values are errors, so the binary exits non-zero.
//! Setting a key to the value it already has leaves `config.json` untouched.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ShelfConfig, KEYS};
use crate::error::{Result, ShelfError};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    Get(String),
    Set { key: String, value: String },
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfConfig::load(data_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::Get(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set { key, value } => {
            let previous = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            config.set(&key, &value).map_err(ShelfError::Config)?;
            let current = config.get(&key).unwrap_or_default();

            if current == previous {
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::info(format!("{} is already {}", key, current)));
                return Ok(result);
            }

            config.save(data_dir)?;
            tracing::info!(key = %key, from = %previous, to = %current, "config changed");
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} changed from {} to {}",
                key, previous, current
            )));
            Ok(result)
        }
    }
}

fn unknown_key(key: &str) -> ShelfError {
    ShelfError::Config(format!(
        "Unknown config key '{}' (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::LayoutPreference;
    use tempfile::tempdir;

    fn set(key: &str, value: &str) -> ConfigAction {
        ConfigAction::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn set_reports_old_and_new_value() {
        let dir = tempdir().unwrap();

        let result = run(dir.path(), set("layout", "Table")).unwrap();
        assert_eq!(result.messages[0].content, "layout changed from auto to table");
        assert_eq!(
            result.config.map(|c| c.layout),
            Some(LayoutPreference::Table)
        );

        let result = run(dir.path(), ConfigAction::Get("layout".into())).unwrap();
        assert_eq!(result.messages[0].content, "table");
    }

    #[test]
    fn unchanged_value_is_not_written() {
        let dir = tempdir().unwrap();

        let result = run(dir.path(), set("breakpoint", "100")).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "breakpoint is already 100");
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn rejected_value_is_an_error() {
        let dir = tempdir().unwrap();

        let err = run(dir.path(), set("breakpoint", "-3")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let dir = tempdir().unwrap();

        let err = run(dir.path(), ConfigAction::Get("colour".into())).unwrap_err();
        assert!(err.to_string().contains("layout, breakpoint, placeholder"));
        assert!(run(dir.path(), set("colour", "red")).is_err());
    }

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ShelfConfig::default()));
    }
}

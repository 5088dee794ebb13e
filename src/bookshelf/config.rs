//! # Configuration
//!
//! Display preferences, stored as `config.json` next to the book data.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `layout` | `auto` | `auto`, `grid` or `table`. `auto` picks by terminal width |
//! | `breakpoint` | `100` | Terminal width (columns) from which `auto` shows the table; narrower terminals get the grid |
//! | `placeholder` | `No Image` | Label shown for books without a picture |
//!
//! A missing file yields the defaults. Unlike the book data, a config file that
//! does not parse is an error: it was written by hand, so silently replacing
//! it would lose the user's edits.

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BREAKPOINT: u16 = 100;
const DEFAULT_PLACEHOLDER: &str = "No Image";

pub const KEYS: &[&str] = &["layout", "breakpoint", "placeholder"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreference {
    #[default]
    Auto,
    Grid,
    Table,
}

impl fmt::Display for LayoutPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LayoutPreference::Auto => "auto",
            LayoutPreference::Grid => "grid",
            LayoutPreference::Table => "table",
        };
        f.write_str(s)
    }
}

impl FromStr for LayoutPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(LayoutPreference::Auto),
            "grid" => Ok(LayoutPreference::Grid),
            "table" => Ok(LayoutPreference::Table),
            other => Err(format!(
                "Invalid layout '{}': expected auto, grid or table",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    #[serde(default)]
    pub layout: LayoutPreference,

    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_breakpoint() -> u16 {
    DEFAULT_BREAKPOINT
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            layout: LayoutPreference::default(),
            breakpoint: DEFAULT_BREAKPOINT,
            placeholder: default_placeholder(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            ShelfError::Config(format!(
                "{}: {}. Fix the file or delete it to restore the defaults",
                config_path.display(),
                e
            ))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        tracing::debug!(dir = %config_dir.display(), "config saved");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "layout" => Some(self.layout.to_string()),
            "breakpoint" => Some(self.breakpoint.to_string()),
            "placeholder" => Some(self.placeholder.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "layout" => {
                self.layout = value.parse()?;
            }
            "breakpoint" => {
                let width: u16 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid breakpoint '{}': expected a column count", value))?;
                if width == 0 {
                    return Err("Breakpoint must be greater than 0".to_string());
                }
                self.breakpoint = width;
            }
            "placeholder" => {
                let label = value.trim();
                if label.is_empty() {
                    return Err("Placeholder cannot be empty".to_string());
                }
                self.placeholder = label.to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.layout, LayoutPreference::Auto);
        assert_eq!(config.breakpoint, 100);
        assert_eq!(config.placeholder, "No Image");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = ShelfConfig::default();
        config.set("layout", "table").unwrap();
        config.save(&nested).unwrap();

        let loaded = ShelfConfig::load(&nested).unwrap();
        assert_eq!(loaded.layout, LayoutPreference::Table);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"breakpoint": 80}"#).unwrap();

        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config.breakpoint, 80);
        assert_eq!(config.layout, LayoutPreference::Auto);
        assert_eq!(config.placeholder, "No Image");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{oops").unwrap();

        let err = ShelfConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
        assert!(err.to_string().contains("delete it to restore the defaults"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ShelfConfig::default();
        assert!(config.set("layout", "carousel").is_err());
        assert!(config.set("breakpoint", "wide").is_err());
        assert!(config.set("breakpoint", "0").is_err());
        assert!(config.set("placeholder", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_get_and_list_all() {
        let mut config = ShelfConfig::default();
        config.set("LAYOUT", "grid").unwrap_err();
        config.set("layout", "GRID").unwrap();
        assert_eq!(config.get("layout").as_deref(), Some("grid"));
        assert_eq!(config.get("nope"), None);

        let keys: Vec<String> = config.list_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["layout", "breakpoint", "placeholder"]);
    }
}

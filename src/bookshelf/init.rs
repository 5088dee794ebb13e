use crate::api::{ShelfApi, ShelfPaths};
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStorage;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "BOOKSHELF_HOME";

/// Everything a front end needs to start. Display settings are not loaded
/// here, so a broken `config.json` never blocks the book commands.
pub struct ShelfContext {
    pub api: ShelfApi<FileStorage>,
    pub data_dir: PathBuf,
}

/// Picks the data directory: an explicit override first, then
/// `BOOKSHELF_HOME`, then the platform data dir.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))
}

pub fn initialize(home: Option<PathBuf>) -> Result<ShelfContext> {
    let dir = data_dir(home)?;
    tracing::debug!(dir = %dir.display(), "using data dir");

    let storage = FileStorage::new(dir.clone());
    let api = ShelfApi::open(
        storage,
        ShelfPaths {
            data_dir: dir.clone(),
        },
    )?;
    tracing::debug!(
        books = api.shelf().books().len(),
        seeded = api.shelf().is_seeded(),
        "shelf ready"
    );

    Ok(ShelfContext { api, data_dir: dir })
}

use super::Storage;
use crate::error::{Result, ShelfError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

const ITEM_EXT: &str = ".json";

/// File-backed storage: every key lives in its own file under `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, ITEM_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ShelfError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::validate_key(key)?;
        match fs::read_to_string(self.item_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Self::validate_key(key)?;
        self.ensure_dir()?;

        // Write next to the target and rename, so readers never see a partial value
        let path = self.item_path(key);
        let tmp = self.root.join(format!(".{}{}.tmp", key, ITEM_EXT));
        fs::write(&tmp, value).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(ShelfError::Io(e));
        }
        tracing::trace!(key, bytes = value.len(), "item written");
        Ok(())
    }
}

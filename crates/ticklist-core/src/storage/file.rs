use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{StorageConfig, SLOT_FILE_EXTENSION};

use super::error::StorageError;
use super::{validate_slot_name, Storage};

/// File-based storage implementation.
///
/// Each slot is one JSON file in the data directory:
/// ```text
/// ~/.ticklist/
///   todo-storage.json     # Store snapshot
///   ticklist.log          # Log output (written by the CLI)
/// ```
pub struct FileStorage {
    /// Directory holding the slot files
    base_path: PathBuf,
}

impl FileStorage {
    /// Creates a FileStorage rooted at the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Creates a FileStorage from storage configuration.
    pub fn with_config(config: &StorageConfig) -> Self {
        Self::new(config.data_path())
    }

    /// Returns the directory slots are stored in.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of a slot's file.
    pub fn slot_path(&self, name: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.{}", name, SLOT_FILE_EXTENSION))
    }

    /// Ensures the data directory exists.
    fn ensure_base_dir(&self) -> Result<(), StorageError> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)
                .map_err(|e| StorageError::io(&self.base_path, e))?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn read_slot(&self, name: &str) -> Result<Option<String>, StorageError> {
        validate_slot_name(name)?;

        let path = self.slot_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
        Ok(Some(contents))
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        validate_slot_name(name)?;
        self.ensure_base_dir()?;

        // Write beside the target then rename, so readers never see a partial slot
        let path = self.slot_path(name);
        let tmp_path = path.with_extension(format!("{}.tmp", SLOT_FILE_EXTENSION));
        fs::write(&tmp_path, contents).map_err(|e| StorageError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::io(&path, e))?;

        Ok(())
    }

    fn remove_slot(&self, name: &str) -> Result<(), StorageError> {
        validate_slot_name(name)?;

        let path = self.slot_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StorageError::io(&path, e))?;
        }

        Ok(())
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::StorageError;
use super::{validate_slot_name, Storage};

/// In-memory storage.
///
/// Clones share the same slots, so a second store opened on a clone sees
/// what the first one wrote. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_slots<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;
        Ok(f(&mut slots))
    }
}

impl Storage for MemoryStorage {
    fn read_slot(&self, name: &str) -> Result<Option<String>, StorageError> {
        validate_slot_name(name)?;
        self.with_slots(|slots| slots.get(name).cloned())
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        validate_slot_name(name)?;
        self.with_slots(|slots| {
            slots.insert(name.to_string(), contents.to_string());
        })
    }

    fn remove_slot(&self, name: &str) -> Result<(), StorageError> {
        validate_slot_name(name)?;
        self.with_slots(|slots| {
            slots.remove(name);
        })
    }
}

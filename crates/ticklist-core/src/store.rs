use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::filter::Filter;
use crate::item::{TodoId, TodoItem};
use crate::storage::{Storage, StorageError};

/// Version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Everything the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order
    #[serde(default)]
    pub items: Vec<TodoItem>,
    /// Active display filter
    #[serde(default)]
    pub filter: Filter,
}

/// On-disk envelope around [`TodoState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: TodoState,
    #[serde(default)]
    pub version: u32,
}

impl Snapshot {
    pub fn new(state: TodoState) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }

    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a snapshot, refusing versions newer than this build understands.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

/// Reasons a new item is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Item text is empty")]
    Empty,

    #[error("Item text must be at least {min} characters")]
    TooShort { min: usize },
}

/// Holds the to-do list and its filter, persisting after every change.
///
/// Operations on an id that is not in the list do nothing and return `false`.
/// Persistence is best effort: a failed write is logged and kept in
/// [`TodoStore::last_persist_error`], and the in-memory change stands.
pub struct TodoStore<S: Storage> {
    storage: S,
    slot: String,
    config: StoreConfig,
    state: TodoState,
    last_persist_error: Option<String>,
}

impl<S: Storage> TodoStore<S> {
    /// Opens a store on the given slot, loading any saved state.
    ///
    /// A missing, unreadable or corrupt slot yields an empty list with the
    /// `All` filter.
    pub fn open(storage: S, slot: impl Into<String>, config: StoreConfig) -> Self {
        let slot = slot.into();
        let state = match Self::load_state(&storage, &slot) {
            Ok(Some(state)) => {
                debug!(slot = %slot, items = state.items.len(), "Loaded saved state");
                state
            }
            Ok(None) => {
                debug!(slot = %slot, "No saved state, starting empty");
                TodoState::default()
            }
            Err(e) => {
                warn!(slot = %slot, error = %e, "Ignoring unreadable saved state");
                TodoState::default()
            }
        };

        Self {
            storage,
            slot,
            config,
            state,
            last_persist_error: None,
        }
    }

    fn load_state(storage: &S, slot: &str) -> Result<Option<TodoState>, StorageError> {
        match storage.read_slot(slot)? {
            Some(json) => Ok(Some(Snapshot::from_json(&json)?.state)),
            None => Ok(None),
        }
    }

    /// Adds a new item at the end of the list.
    ///
    /// The text must contain something besides whitespace and be at least
    /// `min_text_chars` UTF-16 code units long. It is stored exactly as given.
    pub fn add_todo(&mut self, text: &str) -> Result<TodoId, ValidationError> {
        self.validate_new_text(text)?;

        let id = self.generate_id();
        self.state.items.push(TodoItem::new(id, text));
        debug!(id = %id, "Added item");

        self.persist();
        Ok(id)
    }

    /// Checks the text of a new item without adding it.
    pub fn validate_new_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        // Length in UTF-16 code units, so an emoji counts as two
        let min = self.config.min_text_chars;
        if text.encode_utf16().count() < min {
            return Err(ValidationError::TooShort { min });
        }
        Ok(())
    }

    /// Draws random ids until one is free.
    fn generate_id(&self) -> TodoId {
        loop {
            let id = TodoId::random();
            if self.get(id).is_none() {
                return id;
            }
        }
    }

    /// Flips completion of an item. Returns false if no item has `id`.
    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        let completed = item.toggle();
        debug!(id = %id, completed, "Toggled item");

        self.persist();
        true
    }

    /// Removes an item. Returns false if no item has `id`.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        let before = self.state.items.len();
        self.state.items.retain(|item| item.id != id);
        if self.state.items.len() == before {
            return false;
        }
        debug!(id = %id, "Deleted item");

        self.persist();
        true
    }

    /// Replaces the text of an item. Any text is accepted, including "".
    pub fn edit_todo(&mut self, id: TodoId, new_text: impl Into<String>) -> bool {
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.text = new_text.into();
        debug!(id = %id, "Edited item");

        self.persist();
        true
    }

    /// Removes all completed items and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.state.items.len();
        self.state.items.retain(|item| !item.completed);
        let removed = before - self.state.items.len();
        debug!(removed, "Cleared completed items");

        self.persist();
        removed
    }

    /// Marks every item incomplete if all are complete, otherwise marks
    /// every item complete. Ignores the filter.
    pub fn toggle_all(&mut self) {
        let completed = !self.all_completed();
        for item in &mut self.state.items {
            item.completed = completed;
        }
        debug!(completed, count = self.state.items.len(), "Toggled all items");

        self.persist();
    }

    /// Changes the display filter.
    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        debug!(filter = %filter, "Set filter");

        self.persist();
    }

    /// Writes the whole state to the slot.
    fn persist(&mut self) {
        match self.try_persist() {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "Failed to save state");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        let json = Snapshot::new(self.state.clone()).to_json()?;
        self.storage.write_slot(&self.slot, &json)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.state.items.iter_mut().find(|item| item.id == id)
    }

    /// Returns the item with `id`, if any.
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.state.items.iter().find(|item| item.id == id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.state.items
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    /// Items passing the active filter, in list order.
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.items_matching(self.state.filter)
    }

    /// Items passing `filter`, in list order. Leaves the active filter alone.
    pub fn items_matching(&self, filter: Filter) -> Vec<&TodoItem> {
        self.state
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Number of items not yet completed.
    pub fn active_count(&self) -> usize {
        self.state.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.state.items.len() - self.active_count()
    }

    /// True if every item is completed. True for an empty list.
    pub fn all_completed(&self) -> bool {
        self.state.items.iter().all(|item| item.completed)
    }

    /// Error text of the last failed save, cleared by the next good save.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

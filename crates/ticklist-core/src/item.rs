use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest id handed out: 2^53 - 1, the biggest integer a JSON reader backed by
/// doubles can hold exactly.
pub const MAX_TODO_ID: u64 = (1 << 53) - 1;

/// Identifier of a single to-do item.
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wraps a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Draws a random id in `1..=MAX_TODO_ID`.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(1..=MAX_TODO_ID))
    }

    /// Returns the raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// What needs to be done
    pub text: String,
    /// Whether the item has been checked off
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

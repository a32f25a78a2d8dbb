mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Trait for durable key-value slot backends.
///
/// A slot is a named blob of text. The store keeps its whole state in one
/// slot and rewrites it after every change.
pub trait Storage {
    /// Reads a slot, returning `None` if it has never been written.
    fn read_slot(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the contents of a slot.
    fn write_slot(&self, name: &str, contents: &str) -> Result<(), StorageError>;

    /// Removes a slot. Removing a missing slot is not an error.
    fn remove_slot(&self, name: &str) -> Result<(), StorageError>;
}

/// Checks that a slot name is usable as a single path component.
pub(crate) fn validate_slot_name(name: &str) -> Result<(), StorageError> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidSlotName(name.to_string()))
    }
}

pub mod config;
pub mod filter;
pub mod item;
pub mod storage;
pub mod store;

pub use config::{Config, ConfigError, LoggingConfig, StorageConfig, StoreConfig, UiConfig};
pub use filter::{Filter, ParseFilterError};
pub use item::{TodoId, TodoItem};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{Snapshot, TodoState, TodoStore, ValidationError, SNAPSHOT_VERSION};

/// Storage layer for persisting app state
///
/// Every screen persists opaque strings under fixed keys. `KeyValueStore`
/// is that collaborator; `KeyValueStoreExt` adds JSON load/save on top.
/// Writes always replace the whole value.

pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use memory::MemoryStorage;
pub use sqlite::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage keys, compatible with data written by the mobile app
pub mod keys {
    pub const MARKED_DATES: &str = "@period_marked_dates";
    pub const USER_NAME: &str = "@user_name";

    pub const FAVORITE_DHIKR: &str = "@favorite_dhikr";
    pub const FAVORITE_DUAS: &str = "@favorite_duas";
    pub const FAVORITE_QURAN: &str = "@favorite_quran";
    pub const FAVORITE_HADITH: &str = "@favorite_hadith";
    pub const FAVORITE_SALAWAT: &str = "@favorite_salawat";
    pub const FAVORITE_SAHABIYAT: &str = "@favorite_sahabiyat";
    pub const FAVORITE_RESOURCES: &str = "@favorite_resources";

    pub const SELECTED_FEELING: &str = "@selected_feeling";
    pub const SELECTED_FLOW: &str = "@selected_flow";
    pub const REFLECTION_NOTE: &str = "@reflection_note";
    pub const NOTEBOOK_HISTORY: &str = "@notebook_history";
}

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Whether the store itself failed, as opposed to the data in it
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, StorageError::Serialization(_))
    }
}

/// String-valued key-value storage
pub trait KeyValueStore {
    /// Read a value; `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing whatever was there
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key if present
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON helpers over any `KeyValueStore`
pub trait KeyValueStoreExt: KeyValueStore {
    /// Load and decode a value, or its default when the key is missing
    fn load_json<T>(&self, key: &str) -> Result<T, StorageError>
    where
        T: DeserializeOwned + Default,
    {
        match self.get(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(T::default()),
        }
    }

    fn save_json<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

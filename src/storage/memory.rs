/// In-process storage, used by tests and as a scratch store
///
/// It can be switched offline to simulate a failing storage collaborator.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    offline: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with `StorageError::Unavailable`
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }

    fn with_values<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T, StorageError> {
        self.check_online()?;
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(f(&mut values))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_values(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_values(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.with_values(|values| {
            values.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStorage::new();
        store.set("@user_name", "Maryam").unwrap();
        store.set("@user_name", "Aisha").unwrap();
        assert_eq!(store.get("@user_name").unwrap().as_deref(), Some("Aisha"));

        store.remove("@user_name").unwrap();
        assert_eq!(store.get("@user_name").unwrap(), None);
    }

    #[test]
    fn test_offline_mode() {
        let store = MemoryStorage::new();
        store.set("k", "v").unwrap();
        store.set_offline(true);
        assert!(store.get("k").unwrap_err().is_unavailable());
        assert!(store.set("k", "w").is_err());

        store.set_offline(false);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}

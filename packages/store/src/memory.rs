use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::KeyValueStorage;

/// In-memory storage for testing and desktop fallback.
///
/// Clones share the same underlying map, matching the shared nature of
/// browser localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("access_token").is_none());

        storage.set("access_token", "T");
        assert_eq!(storage.get("access_token").as_deref(), Some("T"));

        storage.remove("access_token");
        assert!(storage.get("access_token").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set("user", "{}");
        assert_eq!(b.get("user").as_deref(), Some("{}"));
    }
}

use crate::storage::KeyValueStorage;

/// Browser localStorage backend.
///
/// The struct holds no JavaScript handle: `window.localStorage` is looked
/// up on every call so the type stays `Send + Sync` and usable behind an
/// `Arc<dyn KeyValueStorage>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write failed for key {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}

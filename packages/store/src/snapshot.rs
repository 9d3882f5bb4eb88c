//! Persisted session snapshot.
//!
//! The snapshot is what survives a page reload: the bearer token under
//! [`ACCESS_TOKEN_KEY`](crate::ACCESS_TOKEN_KEY) and the profile under
//! [`USER_KEY`](crate::USER_KEY).

use crate::models::UserInfo;
use crate::storage::{KeyValueStorage, ACCESS_TOKEN_KEY, USER_KEY};

/// The durable half of the session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl SessionSnapshot {
    /// Read the snapshot back from storage. A missing or unparseable user
    /// entry yields `None` rather than an error.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        let access_token = storage.get(ACCESS_TOKEN_KEY);
        let user = storage.get(USER_KEY).and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| tracing::warn!("discarding corrupt stored user: {e}"))
                .ok()
        });
        Self { access_token, user }
    }

    /// Persist both keys, removing entries for absent fields.
    pub fn save(&self, storage: &dyn KeyValueStorage) {
        match &self.access_token {
            Some(token) => storage.set(ACCESS_TOKEN_KEY, token),
            None => storage.remove(ACCESS_TOKEN_KEY),
        }
        match self.user.as_ref().and_then(|u| serde_json::to_string(u).ok()) {
            Some(encoded) => storage.set(USER_KEY, &encoded),
            None => storage.remove(USER_KEY),
        }
    }

    /// Remove both keys.
    pub fn clear(storage: &dyn KeyValueStorage) {
        storage.remove(ACCESS_TOKEN_KEY);
        storage.remove(USER_KEY);
    }
}

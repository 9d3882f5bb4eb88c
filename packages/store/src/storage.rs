//! The key-value storage trait and the session keys.

/// Storage key for the bearer token (token-transport deployments only).
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// A synchronous string key-value store.
///
/// Implemented by [`crate::LocalStorage`] over browser localStorage and by
/// [`crate::MemoryStorage`] for tests and non-wasm targets. Writes are
/// fire-and-forget: a full browser storage quota or a detached window is
/// not a recoverable condition for session mirroring.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

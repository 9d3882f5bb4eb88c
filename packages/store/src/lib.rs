//! Durable client-side session storage for Watchboard.
//!
//! The browser keeps a mirror of the authenticated session under two
//! localStorage keys: [`ACCESS_TOKEN_KEY`] holds the bearer token and
//! [`USER_KEY`] holds the JSON-encoded user profile. This crate abstracts
//! that key-value resource behind [`KeyValueStorage`] so the same session
//! logic runs against real localStorage in the browser and against an
//! in-memory map in tests.
//!
//! Storage is synchronous and unguarded: there are no transactions and no
//! coordination between tabs. A corrupt value is treated as absent.

mod storage;
pub use storage::{KeyValueStorage, ACCESS_TOKEN_KEY, USER_KEY};

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

mod models;
pub use models::UserInfo;

mod snapshot;
pub use snapshot::SessionSnapshot;

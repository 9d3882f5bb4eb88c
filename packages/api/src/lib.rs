//! # API crate — HTTP client layer for Watchboard
//!
//! Everything the frontend knows about the Watchboard server lives here: a
//! configured HTTP client, thin facades over the auth / device / statistics
//! endpoints, and the session manager that keeps reactive state and
//! localStorage in sync with the server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and request timeout for the deployment |
//! | [`error`] | [`ApiError`] — transport, HTTP-status, and decode failures |
//! | [`http`] | [`ApiClient`] — verbs, credential attachment, 401 interception |
//! | [`auth`] | Register / login / me / verify / reset / logout / Google OAuth |
//! | [`devices`] | Device CRUD and per-device API tokens |
//! | [`statistics`] | Read-only dashboard statistics |
//! | [`session`] | [`SessionManager`] — the anonymous/authenticated state machine |
//!
//! Facades are pure request/response mappings: no retries, no caching, no
//! input validation beyond what the server performs. Every failure surfaces
//! as an [`ApiError`]; the one cross-cutting behavior is the 401 handler in
//! [`http`], which clears the stored identity and fires the configured
//! unauthorized hook regardless of which facade issued the request.

pub mod auth;
pub mod config;
pub mod devices;
pub mod error;
pub mod http;
pub mod models;
pub mod session;
pub mod statistics;

pub use auth::AuthApi;
pub use config::ApiConfig;
pub use devices::DevicesApi;
pub use error::ApiError;
pub use http::{ApiClient, CredentialTransport};
pub use session::{SessionManager, SessionState};
pub use statistics::StatisticsApi;

pub use store::UserInfo;

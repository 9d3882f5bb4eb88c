//! This crate contains the shared UI for the workspace: the session
//! context that every view reads, and the small form components the pages
//! are built from.

pub mod components;

mod session;
pub use session::{use_session, LogoutButton, SessionHandle, SessionProvider};

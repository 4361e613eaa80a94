//! HTTP middleware for the admin panel.
//!
//! - [`session`] - tower-sessions layer backed by the SQLite store
//! - [`auth`] - the auth gate: a `RequireAdmin` extractor that redirects
//!   unauthenticated callers to the login page
//! - [`flash`] - one-shot flash message queue stored in the session

pub mod auth;
pub mod flash;
pub mod session;

pub use auth::{RequireAdmin, clear_current_admin, set_current_admin};
pub use flash::{push_flash, take_flash};
pub use session::create_session_layer;

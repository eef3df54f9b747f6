//! Shared plumbing for the Verdora client crates
//!
//! This crate owns the three things every service client needs: the unified
//! error type, the durable session store, and the HTTP fetch helper that
//! unwraps the backend's `{success, ...}` response envelope. Session state
//! (token, user id, name, email, role) has exactly one owner here; the
//! forced-logout policy for 401 responses runs once inside [`fetch`] rather
//! than being duplicated per service.

pub mod error;
pub mod fetch;
pub mod session;

pub use error::Error;
pub use fetch::{Fetch, FetchBuilder};
pub use session::{LoginRoute, Role, Session, SessionStore};

/// Default base URL for the Verdora backend API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/foodAmazondocuments";

//! Durable session storage
//!
//! The `token`/`userId`/`userName`/`userEmail`/`role` keys have a single
//! owner: an in-memory snapshot behind `Arc<RwLock>`, optionally mirrored to
//! a JSON file so a restarted process rehydrates the way a page reload reads
//! local storage. No expiry check happens client-side; a stale token is only
//! discovered when the backend answers 401.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::Error;

/// Account role carried by the backend token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Distributor,
    SuperAdmin,
}

/// Login routes the app shell can navigate to after a forced logout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginRoute {
    Storefront,
    Distributor,
    SuperAdmin,
}

impl LoginRoute {
    /// URL path for this login page
    pub fn path(&self) -> &'static str {
        match self {
            Self::Storefront => "/login",
            Self::Distributor => "/distributor/login",
            Self::SuperAdmin => "/superadmin/login",
        }
    }

    /// The login route appropriate for a stored role
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::SuperAdmin) => Self::SuperAdmin,
            Some(Role::Distributor) => Self::Distributor,
            _ => Self::Storefront,
        }
    }
}

/// The authenticated identity as persisted to durable storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userEmail")]
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Shared store for the current session
///
/// Cloning is cheap; all clones observe the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create an in-memory store with no durable backing
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Create a file-backed store, rehydrating any session already on disk.
    ///
    /// A token + user id on disk is treated as an authenticated session; an
    /// unreadable or malformed file is treated as logged out.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let session = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .filter(|s| !s.token.is_empty() && !s.user_id.is_empty());

        Self {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        }
    }

    /// Store a session in memory and, when file-backed, on disk
    pub fn save(&self, session: Session) -> Result<(), Error> {
        if let Some(path) = &self.path {
            let raw = serde_json::to_string_pretty(&session)?;
            std::fs::write(path, raw)?;
        }
        let mut current = self.inner.write().unwrap();
        *current = Some(session);
        Ok(())
    }

    /// Clear the session from memory and disk
    pub fn clear(&self) {
        if let Some(path) = &self.path {
            // A missing file is already the state we want.
            let _ = std::fs::remove_file(path);
        }
        let mut current = self.inner.write().unwrap();
        *current = None;
    }

    /// The current session, if any
    pub fn current(&self) -> Option<Session> {
        self.inner.read().unwrap().clone()
    }

    /// The stored auth token, if any
    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// The stored user id, if any
    pub fn user_id(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.user_id.clone())
    }

    /// The stored role, if any
    pub fn role(&self) -> Option<Role> {
        self.inner.read().unwrap().as_ref().and_then(|s| s.role)
    }

    /// Whether a token and user id are present (no expiry check)
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap()
            .as_ref()
            .map(|s| !s.token.is_empty() && !s.user_id.is_empty())
            .unwrap_or(false)
    }
}

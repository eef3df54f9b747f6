//! Error handling for the Verdora client

use std::fmt;
use thiserror::Error;

use crate::session::LoginRoute;

/// Unified error type for the Verdora client.
///
/// Service functions never panic on wire failures; every failure mode the
/// backend or the network can produce is folded into one of these variants.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Session file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend rejected the request (non-2xx or `success: false`)
    #[error("{message}")]
    Api {
        message: String,
        status: reqwest::StatusCode,
    },

    /// The backend returned 401; the stored session has been cleared and the
    /// caller should navigate to `login_route`
    #[error("Session rejected, sign in again at {}", login_route.path())]
    Unauthorized { login_route: LoginRoute },

    /// A client-side pre-check failed before any request was issued
    #[error("{0}")]
    Validation(String),

    /// The operation requires a logged-in user
    #[error("You must be logged in")]
    NotLoggedIn,
}

impl Error {
    /// Create a new API error
    pub fn api<T: fmt::Display>(message: T, status: reqwest::StatusCode) -> Self {
        Error::Api {
            message: message.to_string(),
            status,
        }
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(message: T) -> Self {
        Error::Validation(message.to_string())
    }

    /// Whether this error should send the caller to a login page
    pub fn login_redirect(&self) -> Option<LoginRoute> {
        match self {
            Error::Unauthorized { login_route } => Some(*login_route),
            _ => None,
        }
    }
}

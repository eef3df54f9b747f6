//! Configuration options for the Verdora client

use std::path::PathBuf;
use std::time::Duration;

use verdora_rust_core::DEFAULT_BASE_URL;

/// Configuration options for the Verdora client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the API, including the document-root path segment
    pub base_url: String,

    /// The request timeout
    pub request_timeout: Option<Duration>,

    /// Whether to persist the session to durable storage
    pub persist_session: bool,

    /// Where the persisted session lives; defaults to `verdora-session.json`
    /// in the working directory when persistence is on
    pub session_file: Option<PathBuf>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            persist_session: true,
            session_file: None,
        }
    }
}

impl ClientOptions {
    /// Set the API base URL
    pub fn with_base_url(mut self, value: &str) -> Self {
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set whether to persist the session
    pub fn with_persist_session(mut self, value: bool) -> Self {
        self.persist_session = value;
        self
    }

    /// Set the session file path; implies persistence
    pub fn with_session_file<P: Into<PathBuf>>(mut self, value: P) -> Self {
        self.session_file = Some(value.into());
        self.persist_session = true;
        self
    }
}

//! Authentication client for the Verdora API
//!
//! Covers the three account-creation/sign-in flows the storefront exposes
//! (public signup, distributor signup, login), local logout, and session
//! rehydration. All durable identity state lives in the shared
//! [`SessionStore`]; this crate only decides when to write or clear it.

mod guard;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, Role, Session, SessionStore};

pub use guard::{token_role, RouteAccess};

/// The two signup forms enforce different password minimums; both messages
/// are part of the public contract.
const PUBLIC_PASSWORD_MIN: usize = 5;
const DISTRIBUTOR_PASSWORD_MIN: usize = 6;

/// The signed-in user as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
struct AuthPayload {
    token: String,
    user: AuthUser,
}

/// Client for registration, login, and session state
#[derive(Clone)]
pub struct AuthClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl AuthClient {
    /// Create a new AuthClient sharing the given session store
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn users_url(&self, path: &str) -> String {
        format!("{}/users{}", self.base_url, path)
    }

    fn validate_signup(
        name: &str,
        email: &str,
        password: &str,
        min_len: usize,
    ) -> Result<(), Error> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(Error::validation("All fields are required"));
        }
        if password.len() < min_len {
            return Err(Error::validation(format!(
                "Password must be at least {} characters",
                min_len
            )));
        }
        Ok(())
    }

    async fn post_auth(&self, path: &str, body: serde_json::Value) -> Result<AuthUser, Error> {
        let url = self.users_url(path);
        let envelope = Fetch::post(&self.client, &self.session, &url)
            .json(&body)?
            .execute_value()
            .await?;

        let payload: AuthPayload = serde_json::from_value(envelope)?;
        self.session.save(Session {
            token: payload.token,
            user_id: payload.user.id.clone(),
            user_name: payload.user.name.clone(),
            user_email: payload.user.email.clone(),
            role: payload.user.role,
        })?;

        log::debug!("signed in as {}", payload.user.email);
        Ok(payload.user)
    }

    /// Register a new customer account via the public signup form.
    ///
    /// Validation failures (missing fields, password shorter than 5
    /// characters) are returned without issuing any request.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthUser, Error> {
        Self::validate_signup(name, email, password, PUBLIC_PASSWORD_MIN)?;
        self.post_auth(
            "/register",
            serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    /// Register a distributor account.
    ///
    /// The distributor form requires at least 6 password characters, one more
    /// than the public form.
    pub async fn register_distributor(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, Error> {
        Self::validate_signup(name, email, password, DISTRIBUTOR_PASSWORD_MIN)?;
        self.post_auth(
            "/register",
            serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
                "role": Role::Distributor,
            }),
        )
        .await
    }

    /// Sign in with email and password; persists token, id, name, email, and
    /// role to durable storage on success
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, Error> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(Error::validation("All fields are required"));
        }
        self.post_auth(
            "/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Sign out: clears every durable session key. Purely local, no request.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// The rehydrated user, if a token + id are stored. No expiry check is
    /// performed; a revoked token surfaces as a 401 on the next call.
    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.current().map(|s| AuthUser {
            id: s.user_id,
            name: s.user_name,
            email: s.user_email,
            role: s.role,
        })
    }

    /// Whether a stored token and user id are present
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Decide whether the stored identity may enter the given route.
    ///
    /// Public routes are always granted; the `/distributor/*` and
    /// `/superadmin/*` trees require the matching role, decoded from the
    /// stored token. This is a UI gate only, never a security boundary.
    pub fn check_route(&self, path: &str) -> RouteAccess {
        guard::check_route(&self.session, path)
    }
}

//! Account management client for the super-admin user table

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, Role, SessionStore};

use crate::bulk;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating or updating an account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Client for the users resource
#[derive(Clone)]
pub struct UsersClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl UsersClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/users{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<AdminUser>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("users")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<AdminUser, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("user")
            .await
    }

    pub async fn create(&self, user: &UserPayload) -> Result<AdminUser, Error> {
        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(user)?
            .execute_field("user")
            .await
    }

    pub async fn update(&self, id: &str, user: &UserPayload) -> Result<AdminUser, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(user)?
            .execute_field("user")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }

    /// Delete every selected account; one call per id, all concurrent
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, Error> {
        let urls = ids.iter().map(|id| self.url(&format!("/{}", id))).collect();
        bulk::delete_all(&self.client, &self.session, urls).await
    }
}

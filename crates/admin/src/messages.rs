//! Contact-form message client

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::bulk;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client for the messages resource
#[derive(Clone)]
pub struct MessagesClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl MessagesClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/messages{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Message>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("messages")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Message, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("message")
            .await
    }

    /// Mark a message as read when the admin opens it
    pub async fn mark_read(&self, id: &str) -> Result<Message, Error> {
        let url = self.url(&format!("/{}/read", id));
        Fetch::put(&self.client, &self.session, &url)
            .execute_field("message")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }

    /// Delete every selected message; one call per id, all concurrent
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, Error> {
        let urls = ids.iter().map(|id| self.url(&format!("/{}", id))).collect();
        bulk::delete_all(&self.client, &self.session, urls).await
    }
}

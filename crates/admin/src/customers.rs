//! Customer management client

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::bulk;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating a customer record
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Client for the customers resource
#[derive(Clone)]
pub struct CustomersClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl CustomersClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/customers{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Customer>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("customers")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Customer, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("customer")
            .await
    }

    pub async fn create(&self, customer: &CustomerPayload) -> Result<Customer, Error> {
        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(customer)?
            .execute_field("customer")
            .await
    }

    pub async fn update(&self, id: &str, customer: &CustomerPayload) -> Result<Customer, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(customer)?
            .execute_field("customer")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }

    /// Delete every selected customer; one call per id, all concurrent
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, Error> {
        let urls = ids.iter().map(|id| self.url(&format!("/{}", id))).collect();
        bulk::delete_all(&self.client, &self.session, urls).await
    }
}

//! Inventory management client

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::bulk;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub low_stock_threshold: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client for the inventory resource
#[derive(Clone)]
pub struct InventoryClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl InventoryClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/inventory{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<InventoryItem>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("inventory")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<InventoryItem, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("item")
            .await
    }

    /// Set the absolute stock level for an item
    pub async fn set_quantity(&self, id: &str, quantity: i64) -> Result<InventoryItem, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(&serde_json::json!({ "quantity": quantity }))?
            .execute_field("item")
            .await
    }

    /// Adjust stock relative to the fetched record (restock or correction)
    pub async fn adjust(&self, item: &InventoryItem, delta: i64) -> Result<InventoryItem, Error> {
        let quantity = (item.quantity + delta).max(0);
        self.set_quantity(&item.id, quantity).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }

    /// Delete every selected inventory row; one call per id, all concurrent
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, Error> {
        let urls = ids.iter().map(|id| self.url(&format!("/{}", id))).collect();
        bulk::delete_all(&self.client, &self.session, urls).await
    }
}

/// Rows at or below their low-stock threshold, for the dashboard warning
pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| {
            item.low_stock_threshold
                .map(|threshold| item.quantity <= threshold)
                .unwrap_or(false)
        })
        .collect()
}

//! Category service client

use reqwest::Client;

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::{Category, CategoryPayload};

/// Client for the categories resource
#[derive(Clone)]
pub struct CategoriesClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl CategoriesClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/categories{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Category>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("categories")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Category, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("category")
            .await
    }

    pub async fn create(&self, category: &CategoryPayload) -> Result<Category, Error> {
        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(category)?
            .execute_field("category")
            .await
    }

    pub async fn update(&self, id: &str, category: &CategoryPayload) -> Result<Category, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(category)?
            .execute_field("category")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }
}

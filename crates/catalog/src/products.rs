//! Product service client

use reqwest::Client;

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::{NewProduct, Product, ProductUpdate};

/// Client for the products resource
#[derive(Clone)]
pub struct ProductsClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl ProductsClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/products{}", self.base_url, path)
    }

    /// Fetch the full product list; an empty catalog is `Ok(vec![])`
    pub async fn list(&self) -> Result<Vec<Product>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("products")
            .await
    }

    /// Fetch one product by id
    pub async fn get(&self, id: &str) -> Result<Product, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("product")
            .await
    }

    /// Create a product (admin)
    pub async fn create(&self, product: &NewProduct) -> Result<Product, Error> {
        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(product)?
            .execute_field("product")
            .await
    }

    /// Update a product (admin)
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> Result<Product, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(update)?
            .execute_field("product")
            .await
    }

    /// Delete a product (admin)
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }
}

/// Case-insensitive substring search over name and category name, the same
/// filter the storefront applies to an already-fetched list. An empty term
/// matches everything.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category
                    .as_ref()
                    .and_then(|c| c.name())
                    .map(|name| name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect()
}

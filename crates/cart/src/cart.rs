//! Cart state client
//!
//! Holds the current user's cart snapshot and replaces it wholesale with the
//! server's response after every mutation. There is no optimistic update, no
//! request de-duplication, and no cross-process reconciliation: the last
//! response to land wins, and [`CartClient::fetch`] is the explicit refresh
//! hook when staleness matters.

use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::Cart;

/// Shared cart state; clones observe the same snapshot, so a header badge
/// and a cart page can stay in sync without prop drilling
#[derive(Clone)]
pub struct CartClient {
    base_url: String,
    client: Client,
    session: SessionStore,
    state: Arc<RwLock<Option<Cart>>>,
    loading: Arc<AtomicBool>,
}

impl CartClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
            state: Arc::new(RwLock::new(None)),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/carts{}", self.base_url, path)
    }

    fn replace(&self, cart: Option<Cart>) {
        let mut state = self.state.write().unwrap();
        *state = cart;
    }

    /// Fetch the current user's cart and replace the local snapshot.
    ///
    /// A logged-out user is a silent no-op returning `Ok(None)`; the guest
    /// storefront renders an empty cart without an error.
    pub async fn fetch(&self) -> Result<Option<Cart>, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Ok(None);
        };

        self.loading.store(true, Ordering::SeqCst);
        let result = Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", user_id)))
            .execute_field::<Cart>("cart")
            .await;
        self.loading.store(false, Ordering::SeqCst);

        let cart = result?;
        self.replace(Some(cart.clone()));
        Ok(Some(cart))
    }

    /// Add a product to the cart.
    ///
    /// Requires a logged-in user; fails with [`Error::NotLoggedIn`] before any
    /// request otherwise. The full denormalized line item is posted (not just
    /// id + quantity) and the returned server cart replaces local state.
    pub async fn add(
        &self,
        product_id: &str,
        name: &str,
        price: f64,
        image: Option<&str>,
        quantity: u32,
    ) -> Result<Cart, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        let body = serde_json::json!({
            "userId": user_id,
            "productId": product_id,
            "name": name,
            "price": price,
            "image": image,
            "quantity": quantity,
        });

        self.mutate(Fetch::post(&self.client, &self.session, &self.url("/add")).json(&body)?)
            .await
    }

    /// Set the quantity of an existing line item
    pub async fn update_quantity(&self, product_id: &str, quantity: u32) -> Result<Cart, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        let body = serde_json::json!({
            "userId": user_id,
            "productId": product_id,
            "quantity": quantity,
        });

        self.mutate(Fetch::put(&self.client, &self.session, &self.url("/update")).json(&body)?)
            .await
    }

    /// Remove one line item by product id
    pub async fn remove(&self, product_id: &str) -> Result<Cart, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        let url = self.url(&format!("/remove/{}/{}", user_id, product_id));
        self.mutate(Fetch::delete(&self.client, &self.session, &url))
            .await
    }

    /// Empty the cart server-side and drop the local snapshot
    pub async fn clear(&self) -> Result<(), Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        self.loading.store(true, Ordering::SeqCst);
        let url = self.url(&format!("/clear/{}", user_id));
        let result = Fetch::delete(&self.client, &self.session, &url)
            .execute_unit()
            .await;
        self.loading.store(false, Ordering::SeqCst);

        result?;
        self.replace(None);
        Ok(())
    }

    async fn mutate(&self, request: verdora_rust_core::FetchBuilder<'_>) -> Result<Cart, Error> {
        self.loading.store(true, Ordering::SeqCst);
        let result = request.execute_field::<Cart>("cart").await;
        self.loading.store(false, Ordering::SeqCst);

        let cart = result?;
        self.replace(Some(cart.clone()));
        Ok(cart)
    }

    /// The last-fetched snapshot, if any
    pub fn snapshot(&self) -> Option<Cart> {
        self.state.read().unwrap().clone()
    }

    /// Server-computed item count; 0 when no snapshot is held
    pub fn count(&self) -> u32 {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|c| c.total_items)
            .unwrap_or(0)
    }

    /// Server-computed total; 0.0 when no snapshot is held
    pub fn total(&self) -> f64 {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|c| c.total_amount)
            .unwrap_or(0.0)
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

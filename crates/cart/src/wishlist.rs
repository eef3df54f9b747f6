//! Wishlist state client
//!
//! Structurally the cart context minus quantity semantics, with one
//! deliberate policy: adding a product that is already in the local snapshot
//! is an idempotent no-op (no request, snapshot returned unchanged).

use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::Wishlist;

/// Shared wishlist state; clones observe the same snapshot
#[derive(Clone)]
pub struct WishlistClient {
    base_url: String,
    client: Client,
    session: SessionStore,
    state: Arc<RwLock<Option<Wishlist>>>,
    loading: Arc<AtomicBool>,
}

impl WishlistClient {
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
        format!("{}/wishlists{}", self.base_url, path)
    }

    fn replace(&self, wishlist: Option<Wishlist>) {
        let mut state = self.state.write().unwrap();
        *state = wishlist;
    }

    /// Fetch the current user's wishlist; silent no-op when logged out
    pub async fn fetch(&self) -> Result<Option<Wishlist>, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Ok(None);
        };

        self.loading.store(true, Ordering::SeqCst);
        let url = self.url(&format!("/{}", user_id));
        let result = Fetch::get(&self.client, &self.session, &url)
            .execute_field::<Wishlist>("wishlist")
            .await;
        self.loading.store(false, Ordering::SeqCst);

        let wishlist = result?;
        self.replace(Some(wishlist.clone()));
        Ok(Some(wishlist))
    }

    /// Add a product to the wishlist.
    ///
    /// Requires a logged-in user. If the product is already present in the
    /// local snapshot the call returns the snapshot unchanged and issues no
    /// request.
    pub async fn add(
        &self,
        product_id: &str,
        name: &str,
        price: f64,
        image: Option<&str>,
    ) -> Result<Wishlist, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        if self.contains(product_id) {
            log::debug!("{} already wishlisted, skipping add", product_id);
            // contains() implies a snapshot is held
            if let Some(current) = self.snapshot() {
                return Ok(current);
            }
        }

        let body = serde_json::json!({
            "userId": user_id,
            "productId": product_id,
            "name": name,
            "price": price,
            "image": image,
        });

        self.loading.store(true, Ordering::SeqCst);
        let result = Fetch::post(&self.client, &self.session, &self.url("/add"))
            .json(&body)?
            .execute_field::<Wishlist>("wishlist")
            .await;
        self.loading.store(false, Ordering::SeqCst);

        let wishlist = result?;
        self.replace(Some(wishlist.clone()));
        Ok(wishlist)
    }

    /// Remove a product by id
    pub async fn remove(&self, product_id: &str) -> Result<Wishlist, Error> {
        let Some(user_id) = self.session.user_id() else {
            return Err(Error::NotLoggedIn);
        };

        self.loading.store(true, Ordering::SeqCst);
        let url = self.url(&format!("/remove/{}/{}", user_id, product_id));
        let result = Fetch::delete(&self.client, &self.session, &url)
            .execute_field::<Wishlist>("wishlist")
            .await;
        self.loading.store(false, Ordering::SeqCst);

        let wishlist = result?;
        self.replace(Some(wishlist.clone()));
        Ok(wishlist)
    }

    /// Empty the wishlist server-side and drop the local snapshot
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

    /// The last-fetched snapshot, if any
    pub fn snapshot(&self) -> Option<Wishlist> {
        self.state.read().unwrap().clone()
    }

    /// Whether the local snapshot holds this product
    pub fn contains(&self, product_id: &str) -> bool {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|w| w.items.iter().any(|item| item.product_id == product_id))
            .unwrap_or(false)
    }

    /// Item count from the snapshot; 0 when none is held
    pub fn count(&self) -> usize {
        self.state
            .read()
            .unwrap()
            .as_ref()
            .map(|w| w.items.len())
            .unwrap_or(0)
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

//! Rust client for the Verdora organic snacks commerce API
//!
//! One [`Verdora`] handle owns the HTTP client and the shared session store;
//! every per-resource client hangs off it. Sign in through [`Verdora::auth`]
//! and the token flows into every subsequent request automatically, including
//! the admin clients behind the distributor and superadmin dashboards.
//!
//! ```no_run
//! use verdora_rust::Verdora;
//!
//! # async fn run() -> Result<(), verdora_rust::Error> {
//! let verdora = Verdora::new()?;
//! verdora.auth().login("ada@example.com", "secret").await?;
//! verdora.cart().add("p1", "Kale Chips", 4.99, None, 2).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;

use std::path::PathBuf;

use reqwest::Client;
use url::Url;

use verdora_rust_admin::{
    CouponsClient, CustomersClient, InventoryClient, MessagesClient, UsersClient,
};
use verdora_rust_auth::AuthClient;
use verdora_rust_cart::{CartClient, WishlistClient};
use verdora_rust_catalog::{CategoriesClient, ProductsClient, ReviewsClient};
use verdora_rust_core::SessionStore;
use verdora_rust_orders::{CheckoutClient, OrdersClient};

use crate::config::ClientOptions;

pub use verdora_rust_core::{Error, LoginRoute, Role, Session};

/// The main entry point for the Verdora client
pub struct Verdora {
    base_url: String,
    http_client: Client,
    session: SessionStore,
    // Cart and wishlist hold the live server snapshot, so one instance of
    // each is shared by every accessor call.
    cart: CartClient,
    wishlist: WishlistClient,
}

impl Verdora {
    /// Create a client against the default local backend
    pub fn new() -> Result<Self, Error> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client with custom options
    ///
    /// # Example
    ///
    /// ```no_run
    /// use verdora_rust::{config::ClientOptions, Verdora};
    ///
    /// let options = ClientOptions::default()
    ///     .with_base_url("https://shop.example.com/api/foodAmazondocuments")
    ///     .with_persist_session(false);
    /// let verdora = Verdora::with_options(options).unwrap();
    /// ```
    pub fn with_options(options: ClientOptions) -> Result<Self, Error> {
        Url::parse(&options.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let session = if options.persist_session {
            let path = options
                .session_file
                .clone()
                .unwrap_or_else(|| PathBuf::from("verdora-session.json"));
            SessionStore::with_file(path)
        } else {
            SessionStore::in_memory()
        };

        let cart = CartClient::new(&options.base_url, http_client.clone(), session.clone());
        let wishlist = WishlistClient::new(&options.base_url, http_client.clone(), session.clone());

        Ok(Self {
            base_url: options.base_url,
            http_client,
            session,
            cart,
            wishlist,
        })
    }

    /// The shared session store, for code that needs the raw identity keys
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Registration, login, logout, and route guarding
    pub fn auth(&self) -> AuthClient {
        AuthClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Product catalog operations
    pub fn products(&self) -> ProductsClient {
        ProductsClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Category operations
    pub fn categories(&self) -> CategoriesClient {
        CategoriesClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Review listing, submission, and moderation
    pub fn reviews(&self) -> ReviewsClient {
        ReviewsClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// The shared cart, mirroring the server snapshot
    pub fn cart(&self) -> CartClient {
        self.cart.clone()
    }

    /// The shared wishlist, mirroring the server snapshot
    pub fn wishlist(&self) -> WishlistClient {
        self.wishlist.clone()
    }

    /// Order placement, history, and status updates
    pub fn orders(&self) -> OrdersClient {
        OrdersClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// The checkout flow: validate the form, place the order from the current
    /// cart, clear the cart, hand back the payment redirect
    pub fn checkout(&self) -> CheckoutClient {
        CheckoutClient::new(self.orders(), self.cart())
    }

    /// Admin: customer records
    pub fn customers(&self) -> CustomersClient {
        CustomersClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Admin: coupon management
    pub fn coupons(&self) -> CouponsClient {
        CouponsClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Admin: stock levels
    pub fn inventory(&self) -> InventoryClient {
        InventoryClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Admin: account management for the superadmin user table
    pub fn users(&self) -> UsersClient {
        UsersClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }

    /// Admin: contact-form messages
    pub fn messages(&self) -> MessagesClient {
        MessagesClient::new(&self.base_url, self.http_client.clone(), self.session.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::{Error, LoginRoute, Role, Verdora};
    pub use verdora_rust_auth::RouteAccess;
}

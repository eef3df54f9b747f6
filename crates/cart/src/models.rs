//! Server-shaped cart and wishlist snapshots

use serde::{Deserialize, Serialize};

/// One cart line: the full denormalized item the backend stores, including
/// the price captured at add time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub quantity: u32,
    /// Server-computed line subtotal; never recomputed client-side
    #[serde(default)]
    pub subtotal: Option<f64>,
}

/// The server's authoritative cart snapshot.
///
/// `total_items` and `total_amount` are computed by the backend and trusted
/// verbatim; the client does no cart arithmetic of its own, so the UI and the
/// backend can never disagree on totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_amount: f64,
}

/// A wishlist line: a cart item without quantity semantics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<WishlistItem>,
}

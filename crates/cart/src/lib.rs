//! Cart and wishlist clients for the Verdora API
//!
//! The one invariant both clients keep: displayed state is always exactly
//! what the server last returned. Every mutation posts to the backend and
//! replaces the local snapshot with the response; no totals are computed
//! client-side.

mod cart;
mod models;
mod wishlist;

pub use cart::CartClient;
pub use models::{Cart, CartItem, Wishlist, WishlistItem};
pub use wishlist::WishlistClient;

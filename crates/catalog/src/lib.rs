//! Catalog clients for the Verdora API
//!
//! Products and categories are read-only on the storefront and CRUD-managed
//! from the admin surfaces; reviews are customer-submitted and admin-
//! moderated. All referential integrity is the backend's problem; these
//! types consume records as-is.

mod categories;
mod models;
mod products;
mod reviews;

pub use categories::CategoriesClient;
pub use models::*;
pub use products::{search, ProductsClient};
pub use reviews::{approved_only, ReviewsClient};

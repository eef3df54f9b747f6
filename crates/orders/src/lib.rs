//! Order and checkout clients for the Verdora API

mod checkout;
mod models;
mod orders;

pub use checkout::{CheckoutClient, CheckoutForm};
pub use models::*;
pub use orders::OrdersClient;

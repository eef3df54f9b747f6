//! Admin dashboard clients for the Verdora API
//!
//! One client per resource the admin tables manage, plus the pure list
//! helpers those tables share: substring search, status tabs, pagination
//! computed from the actual dataset, and checkbox selection feeding bulk
//! delete.

mod bulk;
mod coupons;
mod customers;
mod inventory;
pub mod listing;
mod messages;
mod users;

pub use coupons::{
    active_only, is_expired, is_usable, Coupon, CouponPayload, CouponStatus, CouponsClient,
    DiscountType,
};
pub use customers::{Customer, CustomerPayload, CustomersClient};
pub use inventory::{low_stock, InventoryClient, InventoryItem};
pub use listing::{filter_by_term, Pagination, Selection};
pub use messages::{Message, MessagesClient};
pub use users::{AdminUser, UserPayload, UsersClient};

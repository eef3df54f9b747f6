//! Checkout flow
//!
//! The single-page flow from the storefront: read the cart, validate the
//! shipping form, create the order from the cart's line items, clear the
//! cart, and hand back the payment redirect URL. The client does no price
//! arithmetic anywhere in this path; line prices and the order total come
//! from the server's cart snapshot.

use verdora_rust_cart::CartClient;
use verdora_rust_core::Error;

use crate::models::{CustomerSnapshot, NewOrder, OrderCreated, OrderItem};
use crate::orders::OrdersClient;

/// Shipping/billing form captured at checkout
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub notes: Option<String>,
}

impl CheckoutForm {
    fn validate(&self) -> Result<(), Error> {
        let required = [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.postal_code,
            &self.country,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(Error::validation("All shipping fields are required"));
        }
        Ok(())
    }
}

/// Drives a checkout against the shared cart state
#[derive(Clone)]
pub struct CheckoutClient {
    orders: OrdersClient,
    cart: CartClient,
}

impl CheckoutClient {
    pub fn new(orders: OrdersClient, cart: CartClient) -> Self {
        Self { orders, cart }
    }

    /// Place an order from the current cart.
    ///
    /// An empty (or absent) cart is refused with "Your cart is empty" before
    /// any order-create request. On success the cart is cleared and the
    /// caller receives the order plus the payment authorization URL to
    /// redirect to.
    pub async fn place_order(&self, form: &CheckoutForm) -> Result<OrderCreated, Error> {
        let cart = self.cart.fetch().await?;
        let cart = match cart {
            Some(cart) if !cart.items.is_empty() => cart,
            _ => return Err(Error::validation("Your cart is empty")),
        };

        form.validate()?;

        let items = cart
            .items
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                name: line.name.clone(),
                price: line.price,
                image: line.image.clone(),
                quantity: line.quantity,
                subtotal: line.subtotal,
            })
            .collect();

        let payload = NewOrder {
            customer: CustomerSnapshot {
                name: form.name.clone(),
                email: form.email.clone(),
                phone: form.phone.clone(),
                address: form.address.clone(),
                city: form.city.clone(),
                postal_code: form.postal_code.clone(),
                country: form.country.clone(),
            },
            items,
            total_amount: cart.total_amount,
            notes: form.notes.clone(),
        };

        let created = self.orders.create(&payload).await?;

        // The order exists server-side at this point; a failed cart clear
        // must not fail the checkout.
        if let Err(err) = self.cart.clear().await {
            log::warn!("order {} placed but cart clear failed: {}", created.order.id, err);
        }

        Ok(created)
    }
}

//! Order service client

use reqwest::Client;
use serde_json::Value;

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::{DeliveryStatus, NewOrder, Order, OrderCreated, PaymentStatus};

/// Client for the orders resource
#[derive(Clone)]
pub struct OrdersClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl OrdersClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/orders{}", self.base_url, path)
    }

    /// Create an order. The response carries the stored order and, when the
    /// payment provider is involved, a redirect URL the caller must follow.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderCreated, Error> {
        let mut envelope = Fetch::post(&self.client, &self.session, &self.url(""))
            .json(order)?
            .execute_value()
            .await?;

        let order: Order = serde_json::from_value(
            envelope.get_mut("order").map(Value::take).unwrap_or(Value::Null),
        )?;
        let payment_url = envelope
            .get("paymentUrl")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(OrderCreated { order, payment_url })
    }

    /// All orders, for the admin order table
    pub async fn list(&self) -> Result<Vec<Order>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("orders")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Order, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("order")
            .await
    }

    /// Orders for one customer, for the account history page
    pub async fn list_for_customer(&self, customer_id: &str) -> Result<Vec<Order>, Error> {
        let url = self.url(&format!("/customer/{}", customer_id));
        Fetch::get(&self.client, &self.session, &url)
            .execute_field("orders")
            .await
    }

    /// Advance an order's delivery status (admin).
    ///
    /// Illegal jumps (e.g. pending straight to delivered, or updating a
    /// terminal order) are refused client-side with a validation error.
    pub async fn update_delivery_status(
        &self,
        order: &Order,
        next: DeliveryStatus,
    ) -> Result<Order, Error> {
        if !order.delivery_status.can_transition_to(next) {
            return Err(Error::validation(format!(
                "Cannot move order {} from {:?} to {:?}",
                order.id, order.delivery_status, next
            )));
        }

        let url = self.url(&format!("/{}/status", order.id));
        Fetch::put(&self.client, &self.session, &url)
            .json(&serde_json::json!({ "deliveryStatus": next }))?
            .execute_field("order")
            .await
    }

    /// Set an order's payment status (admin)
    pub async fn update_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
    ) -> Result<Order, Error> {
        let url = self.url(&format!("/{}/payment", id));
        Fetch::put(&self.client, &self.session, &url)
            .json(&serde_json::json!({ "paymentStatus": status }))?
            .execute_field("order")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }
}

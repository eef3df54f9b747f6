//! Coupon management client

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::bulk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    Active,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "_id")]
    pub id: String,
    pub code: String,
    pub discount_type: DiscountType,
    pub value: f64,
    /// What the coupon applies to: a category name, product id, or "all"
    #[serde(default)]
    pub applies_to: Option<String>,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub times_used: u32,
    pub status: CouponStatus,
}

/// Payload for creating or updating a coupon
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    pub code: String,
    pub discount_type: DiscountType,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
}

/// Client for the coupons resource
#[derive(Clone)]
pub struct CouponsClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl CouponsClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/coupons{}", self.base_url, path)
    }

    pub async fn list(&self) -> Result<Vec<Coupon>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("coupons")
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Coupon, Error> {
        Fetch::get(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_field("coupon")
            .await
    }

    pub async fn create(&self, coupon: &CouponPayload) -> Result<Coupon, Error> {
        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(coupon)?
            .execute_field("coupon")
            .await
    }

    pub async fn update(&self, id: &str, coupon: &CouponPayload) -> Result<Coupon, Error> {
        Fetch::put(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .json(coupon)?
            .execute_field("coupon")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }

    /// Delete every selected coupon; one call per id, all concurrent
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, Error> {
        let urls = ids.iter().map(|id| self.url(&format!("/{}", id))).collect();
        bulk::delete_all(&self.client, &self.session, urls).await
    }
}

/// The coupons the active tab shows
pub fn active_only(coupons: &[Coupon]) -> Vec<&Coupon> {
    let now = Utc::now();
    coupons.iter().filter(|c| is_usable(c, now)).collect()
}

/// Whether a coupon can be applied right now: active, inside its validity
/// window, and under its usage limit. A coupon whose `valid_from` is in the
/// future is not expired, just not applicable yet.
pub fn is_usable(coupon: &Coupon, now: DateTime<Utc>) -> bool {
    if coupon.status != CouponStatus::Active || is_expired(coupon, now) {
        return false;
    }
    if let Some(from) = coupon.valid_from {
        if now < from {
            return false;
        }
    }
    true
}

/// Whether a coupon can no longer be applied: flagged expired, past its
/// validity window, or over its usage limit
pub fn is_expired(coupon: &Coupon, now: DateTime<Utc>) -> bool {
    if coupon.status == CouponStatus::Expired {
        return true;
    }
    if let Some(until) = coupon.valid_until {
        if now > until {
            return true;
        }
    }
    if let Some(limit) = coupon.usage_limit {
        if coupon.times_used >= limit {
            return true;
        }
    }
    false
}

//! Review service client and moderation helpers

use reqwest::Client;

use verdora_rust_core::{Error, Fetch, SessionStore};

use crate::models::{NewReview, Review, ReviewStatus};

/// Client for the reviews resource
#[derive(Clone)]
pub struct ReviewsClient {
    base_url: String,
    client: Client,
    session: SessionStore,
}

impl ReviewsClient {
    pub fn new(base_url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/reviews{}", self.base_url, path)
    }

    /// All reviews, for the admin moderation table
    pub async fn list(&self) -> Result<Vec<Review>, Error> {
        Fetch::get(&self.client, &self.session, &self.url(""))
            .execute_field("reviews")
            .await
    }

    /// Reviews for one product, for the product detail page
    pub async fn list_for_product(&self, product_id: &str) -> Result<Vec<Review>, Error> {
        let url = self.url(&format!("/product/{}", product_id));
        Fetch::get(&self.client, &self.session, &url)
            .execute_field("reviews")
            .await
    }

    /// Submit a customer review.
    ///
    /// Client-side checks: rating must be 1-5, headline and comment must be
    /// non-empty. Failures return without issuing a request.
    pub async fn submit(&self, review: &NewReview) -> Result<Review, Error> {
        if !(1..=5).contains(&review.rating) {
            return Err(Error::validation("Rating must be between 1 and 5"));
        }
        if review.headline.trim().is_empty() || review.comment.trim().is_empty() {
            return Err(Error::validation("Headline and comment are required"));
        }

        Fetch::post(&self.client, &self.session, &self.url(""))
            .json(review)?
            .execute_field("review")
            .await
    }

    /// Moderate a review (admin): approve or push back to pending
    pub async fn set_status(&self, id: &str, status: ReviewStatus) -> Result<Review, Error> {
        let url = self.url(&format!("/{}/status", id));
        Fetch::put(&self.client, &self.session, &url)
            .json(&serde_json::json!({ "status": status }))?
            .execute_field("review")
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.session, &self.url(&format!("/{}", id)))
            .execute_unit()
            .await
    }
}

/// Only the reviews the storefront may show
pub fn approved_only(reviews: &[Review]) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Approved)
        .collect()
}

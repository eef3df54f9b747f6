//! HTTP helper for talking to the Verdora backend
//!
//! Every backend response is an envelope: `{"success": true, ...payload}` on
//! the happy path, `{"success": false, "error": "message"}` otherwise. The
//! builder here unwraps that envelope once for every service crate, and owns
//! the 401 policy: clear the stored session and report which login route the
//! caller should navigate to, derived from the role that was stored when the
//! request was made.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::error::Error;
use crate::session::{LoginRoute, SessionStore};

/// Helper for building and executing requests against the backend
pub struct FetchBuilder<'a> {
    client: &'a Client,
    session: &'a SessionStore,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Vec<u8>>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    ///
    /// Attaches the JSON content type and, when a session is stored, the
    /// `x-auth-token` header every authenticated endpoint expects.
    pub fn new(client: &'a Client, session: &'a SessionStore, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        if let Some(token) = session.token() {
            if let Ok(value) = HeaderValue::from_str(&token) {
                headers.insert("x-auth-token", value);
            }
        }

        Self {
            client,
            session,
            url: url.to_string(),
            method,
            headers,
            query_params: None,
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Send the request and unwrap the response envelope.
    ///
    /// Returns the full envelope body on success. A 401 clears the session;
    /// any other failure surfaces the server's `error` string.
    async fn send(&self) -> Result<Value, Error> {
        log::debug!("{} {}", self.method, self.url);

        let req = self.build()?;
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let role = self.session.role();
            self.session.clear();
            let login_route = LoginRoute::for_role(role);
            log::warn!(
                "401 from {}, session cleared, redirect to {}",
                self.url,
                login_route.path()
            );
            return Err(Error::Unauthorized { login_route });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            return Err(Error::api(message, status));
        }

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Request failed");
            return Err(Error::api(message, status));
        }

        Ok(body)
    }

    /// Execute the request and deserialize one field of the envelope,
    /// e.g. the `"cart"` in `{"success": true, "cart": {...}}`
    pub async fn execute_field<T: DeserializeOwned>(self, field: &str) -> Result<T, Error> {
        let mut body = self.send().await?;
        let payload = body
            .get_mut(field)
            .map(Value::take)
            .unwrap_or(Value::Null);
        let result = serde_json::from_value(payload)?;
        Ok(result)
    }

    /// Execute the request and return the whole unwrapped envelope
    pub async fn execute_value(self) -> Result<Value, Error> {
        self.send().await
    }

    /// Execute a request whose response carries no payload beyond `success`
    pub async fn execute_unit(self) -> Result<(), Error> {
        self.send().await?;
        Ok(())
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, session: &'a SessionStore, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, session, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, session: &'a SessionStore, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, session, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, session: &'a SessionStore, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, session, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(
        client: &'a Client,
        session: &'a SessionStore,
        url: &str,
    ) -> FetchBuilder<'a> {
        FetchBuilder::new(client, session, url, Method::DELETE)
    }
}

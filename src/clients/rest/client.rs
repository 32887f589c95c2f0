//! REST client implementation for the BigCommerce v2 API.
//!
//! This module provides the [`RestClient`] type, the HTTP [`Connection`]
//! used by resource accessors, with path normalization and empty-page
//! detection.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::rest::RestError;
use crate::clients::{Connection, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::BigCommerceConfig;

/// REST API client for a BigCommerce store.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, RestClient, StoreUrl, ApiUser, ApiToken};
/// use bigcommerce_api::clients::Connection;
///
/// let config = BigCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://store.example.com")?)
///     .api_user(ApiUser::new("admin")?)
///     .api_token(ApiToken::new("token")?)
///     .build()?;
///
/// let client = RestClient::new(&config)?;
/// let page = client.get("/products", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            store = %config.store_url().as_ref(),
            api_path = %config.api_path(),
            "created BigCommerce REST client"
        );

        Ok(Self {
            http_client,
            tries: config.tries(),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, &normalized_path).tries(self.tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

impl Connection for RestClient {
    async fn get(
        &self,
        url: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, RestError> {
        let response = self.make_request(HttpMethod::Get, url, None, query).await?;

        if response.is_empty() {
            return Err(RestError::EmptyResponse {
                path: url.to_string(),
            });
        }

        Ok(response.body)
    }

    async fn update(&self, url: &str, updates: &Map<String, Value>) -> Result<Value, RestError> {
        let body = Value::Object(updates.clone());
        let response = self
            .make_request(HttpMethod::Put, url, Some(body), None)
            .await?;

        Ok(response.body)
    }
}

/// Normalizes a resource path.
///
/// 1. Trims whitespace and collapses leading `/` to exactly one
/// 2. Strips trailing `/` characters and a trailing `.json` suffix
/// 3. Returns an error for empty paths
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("/{trimmed}"))
}

//! Configuration types for the BigCommerce API SDK.
//!
//! This module provides the configuration used to build a
//! [`RestClient`](crate::clients::RestClient) connection.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: The main configuration struct
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`StoreUrl`]: A validated store root URL
//! - [`ApiUser`]: A validated API account username
//! - [`ApiToken`]: A validated API token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, StoreUrl, ApiUser, ApiToken};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://store.example.com").unwrap())
//!     .api_user(ApiUser::new("admin").unwrap())
//!     .api_token(ApiToken::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "/api/v2");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ApiUser, StoreUrl};

use crate::error::ConfigError;

/// Default API path of the BigCommerce v2 API.
pub const DEFAULT_API_PATH: &str = "/api/v2";

/// Configuration for a BigCommerce store connection.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    store_url: StoreUrl,
    api_user: ApiUser,
    api_token: ApiToken,
    api_path: String,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the store root URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the API account username.
    #[must_use]
    pub const fn api_user(&self) -> &ApiUser {
        &self.api_user
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API path prepended to every resource URL.
    #[must_use]
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `store_url`, `api_user`, and `api_token`.
///
/// # Defaults
///
/// - `api_path`: `/api/v2`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_url: Option<StoreUrl>,
    api_user: Option<ApiUser>,
    api_token: Option<ApiToken>,
    api_path: Option<String>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store root URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the API account username (required).
    #[must_use]
    pub fn api_user(mut self, user: ApiUser) -> Self {
        self.api_user = Some(user);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the API path.
    #[must_use]
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = Some(path.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request is attempted when the store answers
    /// 429 or 500.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`BigCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if a required field is
    /// missing, [`ConfigError::InvalidApiPath`] if the API path is not
    /// absolute, and [`ConfigError::InvalidTries`] if `tries` is zero.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let api_user = self
            .api_user
            .ok_or(ConfigError::MissingRequiredField { field: "api_user" })?;
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        let api_path = self
            .api_path
            .map_or_else(|| DEFAULT_API_PATH.to_string(), |p| p.trim_end_matches('/').to_string());
        if !api_path.starts_with('/') {
            return Err(ConfigError::InvalidApiPath { path: api_path });
        }

        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        Ok(BigCommerceConfig {
            store_url,
            api_user,
            api_token,
            api_path,
            user_agent_prefix: self.user_agent_prefix,
            tries,
        })
    }
}

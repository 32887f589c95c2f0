//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The username of a BigCommerce legacy API account.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiUser;
///
/// let user = ApiUser::new("admin").unwrap();
/// assert_eq!(user.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUser(String);

impl ApiUser {
    /// Creates a new validated API user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUser`] if the user is empty.
    pub fn new(user: impl Into<String>) -> Result<Self, ConfigError> {
        let user = user.into();
        if user.trim().is_empty() {
            return Err(ConfigError::EmptyApiUser);
        }
        Ok(Self(user))
    }
}

impl AsRef<str> for ApiUser {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A BigCommerce API token.
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiToken(*****)`, so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// The root URL of a BigCommerce store.
///
/// Only `http` and `https` schemes are accepted. A trailing slash is
/// stripped so that the URL can be joined with the API path directly.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://store-abc123.mybigcommerce.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://store-abc123.mybigcommerce.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "store-abc123.mybigcommerce.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidStoreUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidStoreUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidStoreUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidStoreUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for StoreUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

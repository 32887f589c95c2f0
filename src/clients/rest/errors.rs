//! REST-specific error types for the BigCommerce API SDK.
//!
//! - [`RestError::EmptyResponse`]: The store answered a GET with no content
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{Connection, RestError};
//!
//! match client.get("/products", None).await {
//!     Ok(page) => println!("Products: {}", page),
//!     Err(RestError::EmptyResponse { path }) => println!("No records at {}", path),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {}", path),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for connection operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::RestError;
///
/// let error = RestError::EmptyResponse { path: "/products".to_string() };
/// assert!(error.is_empty_response());
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The store answered without content.
    ///
    /// During enumeration this marks the end of the data rather than a
    /// failure.
    #[error("Empty response from {path}")]
    EmptyResponse {
        /// The path that returned no content.
        path: String,
    },

    /// The REST API path is invalid.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns `true` for the empty-response condition.
    #[must_use]
    pub const fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse { .. })
    }

    /// Returns the HTTP status code carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::EmptyResponse { .. } | Self::InvalidPath { .. } => None,
        }
    }
}

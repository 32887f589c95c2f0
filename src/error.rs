//! Error types for the BigCommerce API SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ApiUser, ConfigError};
//!
//! let result = ApiUser::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiUser)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API user cannot be empty.
    #[error("API user cannot be empty. Please provide the username of a BigCommerce API account.")]
    EmptyApiUser,

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid BigCommerce API token.")]
    EmptyApiToken,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://store-abc123.mybigcommerce.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API path is invalid.
    #[error("Invalid API path '{path}'. Expected an absolute path such as '/api/v2'.")]
    InvalidApiPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// Retry count is invalid.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The rejected value.
        tries: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

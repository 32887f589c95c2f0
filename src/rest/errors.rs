//! Resource-specific error types for the object mapper.
//!
//! This module contains [`ResourceError`], which extends the connection-level
//! [`RestError`](crate::clients::RestError) with mapper semantics.
//!
//! # Error Policy
//!
//! - [`ResourceAccessor::enumerate`](crate::rest::ResourceAccessor::enumerate)
//!   yields connection failures unchanged (wrapped in [`ResourceError::Rest`]);
//!   the empty-response condition ends the sequence instead.
//! - [`ResourceAccessor::get`](crate::rest::ResourceAccessor::get) turns any
//!   failure into `None`; use
//!   [`ResourceAccessor::try_get`](crate::rest::ResourceAccessor::try_get) to
//!   tell "not found" from "request failed".
//! - [`ResourceAccessor::filters`](crate::rest::ResourceAccessor::filters)
//!   falls back to an empty filter set.

use crate::clients::RestError;
use thiserror::Error;

/// Error type for object mapper operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceError;
///
/// let error = ResourceError::Resolution { name: "Bogus".to_string() };
/// assert!(error.to_string().contains("Bogus"));
///
/// let error = ResourceError::AttributeNotFound {
///     resource: "Products",
///     field: "colour".to_string(),
/// };
/// assert!(error.to_string().contains("colour"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource class is registered under the requested name.
    #[error("No resource class registered for '{name}'")]
    Resolution {
        /// The name that failed to resolve.
        name: String,
    },

    /// A record has no `id` field, so its URL cannot be computed.
    #[error("{resource} record has no 'id' field")]
    MissingId {
        /// The class name of the record.
        resource: &'static str,
    },

    /// A field read for a name absent from the record.
    #[error("{resource} has no field '{field}'")]
    AttributeNotFound {
        /// The class name of the record.
        resource: &'static str,
        /// The requested field.
        field: String,
    },

    /// The store answered 404 for a single record.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The class name of the resource.
        resource: &'static str,
        /// The requested id.
        id: String,
    },

    /// A sub-resource location is neither a URL nor a `{"resource": ...}` link.
    #[error("Cannot locate sub-resource {resource} from {location}")]
    InvalidSubResource {
        /// The class name of the sub-resource.
        resource: &'static str,
        /// The JSON value found in the parent record.
        location: String,
    },

    /// The store answered with a payload of the wrong shape (a page that is
    /// not a JSON array, a count without a `count` field).
    #[error("Unexpected response payload from {url}")]
    UnexpectedResponse {
        /// The URL that was requested.
        url: String,
    },

    /// A filter name is not declared by the filter set.
    #[error("Unknown filter '{filter}'")]
    UnknownFilter {
        /// The rejected filter name.
        filter: String,
    },

    /// A `min`/`max` bound was set on a filter that does not take ranges.
    #[error("Filter '{filter}' does not accept a range")]
    InvalidFilterRange {
        /// The filter name.
        filter: String,
    },

    /// A connection-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

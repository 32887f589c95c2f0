//! REST connection for the BigCommerce v2 API.
//!
//! This module provides the HTTP [`Connection`](crate::clients::Connection)
//! built on top of [`HttpClient`](crate::clients::HttpClient).
//!
//! - [`RestClient`]: The connection used by resource accessors
//! - [`RestError`]: Error type for connection operations
//!
//! # Empty Pages
//!
//! BigCommerce answers `204 No Content` when a page lies past the last
//! record. [`RestClient`] turns that into [`RestError::EmptyResponse`], which
//! enumeration treats as the end of the data.
//!
//! # Retry Behavior
//!
//! Requests are attempted `tries` times (from the configuration, default 1)
//! on 429 (rate limited) and 500 (server error) responses.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;

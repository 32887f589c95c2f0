//! HTTP client types for BigCommerce store communication.
//!
//! # Overview
//!
//! - [`Connection`]: The transport contract resource accessors depend on
//! - [`RestClient`]: The HTTP [`Connection`] for the v2 REST API
//! - [`HttpClient`]: The async HTTP client with authentication and retries
//! - [`HttpRequest`]: A request to be sent to the store
//! - [`HttpResponse`]: A parsed response from the store
//! - [`HttpMethod`]: HTTP methods used by the mapper (GET, PUT)
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **500 (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries.

mod connection;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use connection::Connection;
pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};

//! The connection contract the object mapper talks to.
//!
//! A [`Connection`] fetches raw JSON from the store and sends partial
//! updates back. [`RestClient`](crate::clients::RestClient) is the HTTP
//! implementation; tests and alternative transports implement the trait
//! directly.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::RestError;

/// Transport used by resource accessors and objects.
///
/// # Contract
///
/// - `get` returns the decoded body: a JSON array for a page of records or a
///   JSON object for a single record. A request that yields no content must
///   fail with [`RestError::EmptyResponse`]; enumeration treats that as the
///   end of the data.
/// - `get_resource_url` maps a lowercase resource name to its base URL path.
/// - `update` performs a partial update of the record at `url`.
#[allow(async_fn_in_trait)]
pub trait Connection: Send + Sync {
    /// Fetches `url` with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyResponse`] when there is no content, and
    /// any other [`RestError`] for transport failures.
    async fn get(
        &self,
        url: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, RestError>;

    /// Sends a partial update for the record at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] for transport failures.
    async fn update(&self, url: &str, updates: &Map<String, Value>) -> Result<Value, RestError>;

    /// Returns the base URL path for a lowercase resource name.
    fn get_resource_url(&self, resource: &str) -> String {
        format!("/{resource}")
    }
}

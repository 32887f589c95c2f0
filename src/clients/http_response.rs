//! HTTP response types for the BigCommerce API SDK.

use std::collections::HashMap;

/// An HTTP response from a BigCommerce store.
///
/// Contains the response status code, headers, body, and the parsed
/// rate-limit headers the store sends with every answer.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `Null` when the store sent no body.
    pub body: serde_json::Value,
    /// Remaining requests in the current window (from `X-BC-ApiLimit-Remaining`).
    pub api_limit_remaining: Option<u32>,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_limit_remaining = first_header(&headers, "x-bc-apilimit-remaining")
            .and_then(|value| value.parse::<u32>().ok());

        let retry_request_after =
            first_header(&headers, "retry-after").and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            api_limit_remaining,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` when the store answered without content.
    ///
    /// BigCommerce answers `204 No Content` for a page past the last record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code == 204 || self.body.is_null()
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

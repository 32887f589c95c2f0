//! Read-only attribute view over nested JSON objects.
//!
//! Plain nested objects in a record (a billing address, a primary image)
//! are exposed as a [`Mapping`]. It derefs to the underlying
//! [`serde_json::Map`], so every map method works directly, and adds
//! typed accessors plus dotted-path lookup.
//!
//! ```rust
//! use bigcommerce_api::rest::Mapping;
//! use serde_json::json;
//!
//! let address = Mapping::try_from(json!({
//!     "city": "Austin",
//!     "geo": {"lat": 30.27, "lng": -97.74}
//! }))
//! .unwrap();
//!
//! assert_eq!(address.get_str("city"), Some("Austin"));
//! assert_eq!(address.path("geo.lat").and_then(|v| v.as_f64()), Some(30.27));
//! assert_eq!(address.len(), 2); // Map method via Deref
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A nested JSON object exposed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(Map<String, Value>);

impl Mapping {
    /// Wraps a JSON object.
    #[must_use]
    pub const fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns the value of `key` as a string slice.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the value of `key` as an `i64`.
    #[must_use]
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    /// Returns the value of `key` as an `f64`.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Returns the value of `key` as a `bool`.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Returns the nested object under `key` as another mapping.
    #[must_use]
    pub fn get_mapping(&self, key: &str) -> Option<Self> {
        match self.0.get(key) {
            Some(Value::Object(map)) => Some(Self(map.clone())),
            _ => None,
        }
    }

    /// Follows a dotted path (`"geo.lat"`) through nested objects.
    #[must_use]
    pub fn path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Returns the underlying map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the mapping and returns the underlying map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for Mapping {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for Mapping {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Mapping {
    type Error = Value;

    /// Wraps `value` if it is an object; hands it back otherwise.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Object(mapping.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Mapping {
        Mapping::try_from(json!({
            "first_name": "Ada",
            "zip": 78701,
            "default": true,
            "geo": {"lat": 30.27, "country": {"iso2": "US"}}
        }))
        .unwrap()
    }

    #[test]
    fn test_typed_accessors() {
        let mapping = sample();
        assert_eq!(mapping.get_str("first_name"), Some("Ada"));
        assert_eq!(mapping.get_i64("zip"), Some(78701));
        assert_eq!(mapping.get_bool("default"), Some(true));
        assert_eq!(mapping.get_str("zip"), None);
        assert_eq!(mapping.get_str("missing"), None);
    }

    #[test]
    fn test_nested_mapping_and_path() {
        let mapping = sample();
        let geo = mapping.get_mapping("geo").unwrap();
        assert_eq!(geo.get_f64("lat"), Some(30.27));

        assert_eq!(mapping.path("geo.country.iso2"), Some(&json!("US")));
        assert_eq!(mapping.path("geo.missing"), None);
        assert_eq!(mapping.path("zip.inner"), None);
    }

    #[test]
    fn test_deref_exposes_map_methods() {
        let mapping = sample();
        assert_eq!(mapping.len(), 4);
        assert!(mapping.contains_key("geo"));
    }

    #[test]
    fn test_try_from_non_object_hands_value_back() {
        let result = Mapping::try_from(json!([1, 2]));
        assert_eq!(result, Err(json!([1, 2])));
    }

    #[test]
    fn test_serializes_transparently() {
        let mapping = Mapping::try_from(json!({"a": 1})).unwrap();
        assert_eq!(serde_json::to_value(&mapping).unwrap(), json!({"a": 1}));
    }
}

//! Query filters for listing endpoints.
//!
//! A [`FilterSet`] collects filter values for a resource class and renders
//! them as the query parameters the store expects. Number and date filters
//! accept `min_`/`max_` bounds, so `price` between 10 and 20 becomes
//! `min_price=10&max_price=20`.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{Filter, FilterSet, Query};
//!
//! static FILTERS: &[Filter] = &[Filter::string("name"), Filter::number("price")];
//!
//! let filters = FilterSet::new(FILTERS)
//!     .eq("name", "Shirt")?
//!     .min("price", 10)?
//!     .max("price", 20)?;
//!
//! let query = filters.query_dict();
//! assert_eq!(query["name"], "Shirt");
//! assert_eq!(query["min_price"], "10");
//! assert_eq!(query["max_price"], "20");
//! # Ok::<(), bigcommerce_api::rest::ResourceError>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, Utc};

use crate::rest::ResourceError;

/// Anything that can render itself as listing query parameters.
///
/// Implemented by [`FilterSet`] and by plain `HashMap<String, String>`
/// dictionaries.
pub trait Query {
    /// Returns the query parameters to merge into a listing request.
    fn query_dict(&self) -> HashMap<String, String>;
}

impl Query for HashMap<String, String> {
    fn query_dict(&self) -> HashMap<String, String> {
        self.clone()
    }
}

/// The value type a filter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text, matched exactly or by prefix depending on the endpoint.
    String,
    /// A numeric value; accepts `min_`/`max_` bounds.
    Number,
    /// A date rendered in RFC 2822 form; accepts `min_`/`max_` bounds.
    Date,
    /// `true` or `false`.
    Bool,
}

/// A filter declared by a resource class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    /// The query parameter name.
    pub name: &'static str,
    /// The accepted value type.
    pub kind: FilterKind,
}

impl Filter {
    /// Declares a text filter.
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: FilterKind::String,
        }
    }

    /// Declares a numeric filter.
    #[must_use]
    pub const fn number(name: &'static str) -> Self {
        Self {
            name,
            kind: FilterKind::Number,
        }
    }

    /// Declares a date filter.
    #[must_use]
    pub const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FilterKind::Date,
        }
    }

    /// Declares a boolean filter.
    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: FilterKind::Bool,
        }
    }

    /// Returns `true` if the filter takes `min_`/`max_` bounds.
    #[must_use]
    pub const fn is_ranged(&self) -> bool {
        matches!(self.kind, FilterKind::Number | FilterKind::Date)
    }
}

/// Filter values for one resource class.
///
/// An empty set (no declared filters) is what
/// [`ResourceAccessor::filters`](crate::rest::ResourceAccessor::filters)
/// returns for classes without filter declarations; every setter on it
/// fails with [`ResourceError::UnknownFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: &'static [Filter],
    values: BTreeMap<String, String>,
}

impl FilterSet {
    /// Creates an empty set of values over the given declarations.
    #[must_use]
    pub const fn new(filters: &'static [Filter]) -> Self {
        Self {
            filters,
            values: BTreeMap::new(),
        }
    }

    /// Returns the declared filters.
    #[must_use]
    pub const fn filters(&self) -> &'static [Filter] {
        self.filters
    }

    /// Returns `true` if no values have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sets an exact-match value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownFilter`] if `name` is not declared.
    pub fn eq(mut self, name: &str, value: impl fmt::Display) -> Result<Self, ResourceError> {
        let filter = self.lookup(name)?;
        self.values
            .insert(filter.name.to_string(), value.to_string());
        Ok(self)
    }

    /// Sets a lower bound (`min_<name>`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownFilter`] if `name` is not declared,
    /// or [`ResourceError::InvalidFilterRange`] if it does not take ranges.
    pub fn min(self, name: &str, value: impl fmt::Display) -> Result<Self, ResourceError> {
        self.bound("min", name, value.to_string())
    }

    /// Sets an upper bound (`max_<name>`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownFilter`] if `name` is not declared,
    /// or [`ResourceError::InvalidFilterRange`] if it does not take ranges.
    pub fn max(self, name: &str, value: impl fmt::Display) -> Result<Self, ResourceError> {
        self.bound("max", name, value.to_string())
    }

    /// Sets the earliest date (`min_<name>`) in RFC 2822 form.
    ///
    /// # Errors
    ///
    /// Same as [`FilterSet::min`].
    pub fn since(self, name: &str, date: DateTime<Utc>) -> Result<Self, ResourceError> {
        self.bound("min", name, date.to_rfc2822())
    }

    /// Sets the latest date (`max_<name>`) in RFC 2822 form.
    ///
    /// # Errors
    ///
    /// Same as [`FilterSet::max`].
    pub fn until(self, name: &str, date: DateTime<Utc>) -> Result<Self, ResourceError> {
        self.bound("max", name, date.to_rfc2822())
    }

    fn bound(mut self, prefix: &str, name: &str, value: String) -> Result<Self, ResourceError> {
        let filter = self.lookup(name)?;
        if !filter.is_ranged() {
            return Err(ResourceError::InvalidFilterRange {
                filter: name.to_string(),
            });
        }
        self.values.insert(format!("{prefix}_{}", filter.name), value);
        Ok(self)
    }

    fn lookup(&self, name: &str) -> Result<Filter, ResourceError> {
        self.filters
            .iter()
            .find(|filter| filter.name == name)
            .copied()
            .ok_or_else(|| ResourceError::UnknownFilter {
                filter: name.to_string(),
            })
    }
}

impl Query for FilterSet {
    fn query_dict(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

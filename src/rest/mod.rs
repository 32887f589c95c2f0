//! Generic object mapper over the store's REST API.
//!
//! - [`ResourceAccessor`]: Fetches, enumerates and counts records of one
//!   resource class
//! - [`Enumeration`]: A lazy, page-by-page cursor over records
//! - [`ResourceObject`]: One record, with lazily resolved sub-resources
//!   and staged updates
//! - [`ResourceClass`]: Static description of a resource type
//! - [`ResourceRegistry`]: Name-to-class lookup
//! - [`FilterSet`] and [`Query`]: Listing filters
//! - [`Mapping`]: Attribute view over nested JSON objects
//! - [`StoreApi`]: A connection paired with a registry
//! - [`ResourceError`]: Error type for mapper operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{EnumerateParams, Field, StoreApi};
//!
//! let api = StoreApi::from_config(&config)?;
//! let products = api.resource("Products")?;
//!
//! let filters = products.filters().min("price", 10)?.eq("is_visible", true)?;
//! let mut cursor = products.enumerate(EnumerateParams::new().query(&filters));
//!
//! while let Some(product) = cursor.next().await {
//!     let mut product = product?;
//!     let url = product.url().to_string();
//!     if let Field::Single(Some(brand)) = product.resolve("brand").await? {
//!         println!("{url} by {brand}");
//!     }
//! }
//! ```

mod accessor;
mod api;
mod class;
mod errors;
mod filters;
mod mapping;
mod object;
mod registry;
#[cfg(test)]
mod test_support;

pub mod resources;

pub use accessor::{
    EnumerateParams, Enumeration, ResourceAccessor, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use api::StoreApi;
pub use class::{ResourceClass, SubResource};
pub use errors::ResourceError;
pub use filters::{Filter, FilterKind, FilterSet, Query};
pub use mapping::Mapping;
pub use object::{Field, Parent, ResourceObject};
pub use registry::ResourceRegistry;

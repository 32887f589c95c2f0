//! # BigCommerce API Rust SDK
//!
//! A generic object mapper for the BigCommerce v2 REST API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for the store URL and credentials
//! - An async HTTP client with Basic authentication and retry handling
//! - Resource accessors that enumerate, fetch and count records by
//!   resource name, paging lazily through the store's listing endpoints
//! - Resource objects whose nested sub-resources are fetched on first access
//!   and cached, with staged partial updates
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{ApiToken, ApiUser, BigCommerceConfig, StoreUrl};
//!
//! let config = BigCommerceConfig::builder()
//!     .store_url(StoreUrl::new("https://store.example.com").unwrap())
//!     .api_user(ApiUser::new("admin").unwrap())
//!     .api_token(ApiToken::new("secret-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "/api/v2");
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use bigcommerce_api::{StoreApi, rest::{EnumerateParams, Field}};
//!
//! let api = StoreApi::from_config(&config)?;
//! let products = api.resource("Products")?;
//!
//! // Records 100..110, fetched in pages of at most 250.
//! let mut cursor = products.enumerate(EnumerateParams::new().start(100).limit(10));
//! while let Some(product) = cursor.next().await {
//!     let mut product = product?;
//!
//!     // Fetched from /products/{id}/images on first access, then cached.
//!     if let Field::List(images) = product.resolve("images").await? {
//!         println!("{} has {} images", product.url(), images.len());
//!     }
//! }
//!
//! // Partial update: only staged fields are sent.
//! if let Some(mut product) = products.get(32).await {
//!     product.attr("price", "19.99");
//!     product.save().await?;
//! }
//! ```
//!
//! ## Custom Transports
//!
//! Everything above the HTTP layer talks to the [`Connection`] trait, so
//! tests and alternative transports can plug in their own implementation.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and registries are instance-based
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The HTTP client and errors are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiUser, BigCommerceConfig, BigCommerceConfigBuilder, StoreUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Connection, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient,
    RestError,
};

// Re-export mapper entry points
pub use rest::{
    EnumerateParams, FilterSet, ResourceAccessor, ResourceError, ResourceObject,
    ResourceRegistry, StoreApi,
};

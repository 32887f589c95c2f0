//! Store-level entry point.

use std::sync::Arc;

use crate::clients::{Connection, RestClient};
use crate::config::BigCommerceConfig;
use crate::rest::{ResourceAccessor, ResourceError, ResourceRegistry};

/// A connection paired with the registry used to resolve resource names.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, StoreApi, StoreUrl, ApiUser, ApiToken};
/// use bigcommerce_api::rest::EnumerateParams;
///
/// let config = BigCommerceConfig::builder()
///     .store_url(StoreUrl::new("https://store.example.com")?)
///     .api_user(ApiUser::new("admin")?)
///     .api_token(ApiToken::new("token")?)
///     .build()?;
///
/// let api = StoreApi::from_config(&config)?;
/// let products = api.resource("Products")?;
/// println!("{} products", products.get_count(None).await?);
///
/// let mut page = products.enumerate(EnumerateParams::new().limit(10));
/// while let Some(product) = page.next().await {
///     println!("{}", product?);
/// }
/// ```
pub struct StoreApi<C> {
    connection: Arc<C>,
    registry: ResourceRegistry,
}

impl<C> std::fmt::Debug for StoreApi<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreApi")
            .field("resources", &self.registry.names())
            .finish_non_exhaustive()
    }
}

impl<C: Connection> StoreApi<C> {
    /// Wraps `connection` with the BigCommerce v2 registry.
    #[must_use]
    pub fn new(connection: C) -> Self {
        Self::with_registry(connection, ResourceRegistry::bigcommerce_v2())
    }

    /// Wraps `connection` with a custom registry.
    #[must_use]
    pub fn with_registry(connection: C, registry: ResourceRegistry) -> Self {
        Self {
            connection: Arc::new(connection),
            registry,
        }
    }

    /// Returns an accessor for the resource registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Resolution`] for unknown names.
    pub fn resource(&self, name: &str) -> Result<ResourceAccessor<C>, ResourceError> {
        ResourceAccessor::new(name, Arc::clone(&self.connection), &self.registry)
    }

    /// Returns the shared connection.
    #[must_use]
    pub const fn connection(&self) -> &Arc<C> {
        &self.connection
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Returns the registry for adding custom classes.
    pub fn registry_mut(&mut self) -> &mut ResourceRegistry {
        &mut self.registry
    }
}

impl StoreApi<RestClient> {
    /// Connects to the configured store over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the HTTP client cannot be created.
    pub fn from_config(config: &BigCommerceConfig) -> Result<Self, ResourceError> {
        Ok(Self::new(RestClient::new(config)?))
    }
}

//! Name-to-class lookup for top-level resources.

use std::collections::HashMap;

use crate::rest::resources::v2;
use crate::rest::{ResourceClass, ResourceError};

/// Maps resource names to their classes.
///
/// Accessors are created by name (`"Products"`, `"Orders"`); the registry
/// decides which names exist. Nested classes reached only through
/// sub-resource fields do not need to be registered.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::{ResourceClass, ResourceRegistry};
///
/// static WIDGETS: ResourceClass = ResourceClass::named("Widgets");
///
/// let registry = ResourceRegistry::bigcommerce_v2().with(&WIDGETS);
/// assert!(registry.contains("Products"));
/// assert!(registry.contains("Widgets"));
/// assert!(registry.resolve("Bogus").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    classes: HashMap<&'static str, &'static ResourceClass>,
}

impl ResourceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the BigCommerce v2 resources.
    #[must_use]
    pub fn bigcommerce_v2() -> Self {
        v2::TOP_LEVEL
            .iter()
            .copied()
            .fold(Self::new(), Self::with)
    }

    /// Registers `class` under its name, returning the class it replaced.
    pub fn register(&mut self, class: &'static ResourceClass) -> Option<&'static ResourceClass> {
        self.classes.insert(class.name, class)
    }

    /// Registers `class` and returns the registry, for chaining.
    #[must_use]
    pub fn with(mut self, class: &'static ResourceClass) -> Self {
        self.register(class);
        self
    }

    /// Looks up the class registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Resolution`] if nothing is registered under
    /// `name`.
    pub fn resolve(&self, name: &str) -> Result<&'static ResourceClass, ResourceError> {
        self.classes
            .get(name)
            .copied()
            .ok_or_else(|| ResourceError::Resolution {
                name: name.to_string(),
            })
    }

    /// Returns `true` if a class is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Returns the registered names in alphabetical order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.classes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

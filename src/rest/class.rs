//! Static descriptors for resource types.
//!
//! Every resource type the mapper knows about is described by a
//! [`ResourceClass`]: its name, the fields the store lets clients write,
//! the fields it keeps read-only, the fields that link to nested
//! sub-resources, and the filters its listing endpoint accepts.
//!
//! Classes are plain `static` items so they can reference each other:
//!
//! ```rust
//! use bigcommerce_api::rest::{Filter, ResourceClass, SubResource};
//!
//! static IMAGES: ResourceClass = ResourceClass {
//!     writeable: &["image_file", "description"],
//!     ..ResourceClass::named("ProductImages")
//! };
//!
//! static PRODUCTS: ResourceClass = ResourceClass {
//!     writeable: &["name", "price"],
//!     read_only: &["id", "date_created"],
//!     sub_resources: &[SubResource::many("images", &IMAGES)],
//!     filters: Some(&[Filter::string("name"), Filter::number("price")]),
//!     ..ResourceClass::named("Products")
//! };
//!
//! assert!(PRODUCTS.sub_resource("images").is_some());
//! assert!(PRODUCTS.sub_resource("name").is_none());
//! ```

use crate::rest::{Filter, FilterSet};

/// Declaration of a field that links to a nested resource.
#[derive(Debug, Clone, Copy)]
pub struct SubResource {
    /// The field name in the parent record.
    pub field: &'static str,
    /// The class of the nested records.
    pub klass: &'static ResourceClass,
    /// `true` when the link points at one record rather than a collection.
    pub single: bool,
}

impl SubResource {
    /// Declares a field that links to a collection of records.
    #[must_use]
    pub const fn many(field: &'static str, klass: &'static ResourceClass) -> Self {
        Self {
            field,
            klass,
            single: false,
        }
    }

    /// Declares a field that links to exactly one record.
    #[must_use]
    pub const fn single(field: &'static str, klass: &'static ResourceClass) -> Self {
        Self {
            field,
            klass,
            single: true,
        }
    }
}

/// Static description of a resource type.
///
/// The writeable and read-only lists are informational: they document the
/// store's API but [`ResourceObject::attr`](crate::rest::ResourceObject::attr)
/// does not enforce them.
#[derive(Debug)]
pub struct ResourceClass {
    /// The resource type name (e.g., "Products").
    pub name: &'static str,
    /// Fields the store accepts in updates.
    pub writeable: &'static [&'static str],
    /// Fields the store manages itself.
    pub read_only: &'static [&'static str],
    /// Fields that link to nested resources.
    pub sub_resources: &'static [SubResource],
    /// Filters accepted by the listing endpoint, if the class declares any.
    pub filters: Option<&'static [Filter]>,
}

impl ResourceClass {
    /// Creates a class with the given name and no declarations.
    ///
    /// Use it as the base of a struct update expression.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            writeable: &[],
            read_only: &[],
            sub_resources: &[],
            filters: None,
        }
    }

    /// Returns the sub-resource declaration for `field`, if any.
    #[must_use]
    pub fn sub_resource(&self, field: &str) -> Option<&'static SubResource> {
        self.sub_resources.iter().find(|decl| decl.field == field)
    }

    /// Returns the class's filter-set builder, if the class declares one.
    #[must_use]
    pub fn filter_set(&self) -> Option<FilterSet> {
        self.filters.map(FilterSet::new)
    }

    /// Returns `true` if `field` is declared writeable.
    #[must_use]
    pub fn is_writeable(&self, field: &str) -> bool {
        self.writeable.contains(&field)
    }

    /// Returns `true` if `field` is declared read-only.
    #[must_use]
    pub fn is_read_only(&self, field: &str) -> bool {
        self.read_only.contains(&field)
    }
}

//! Resource classes for the BigCommerce v2 API.
//!
//! Top-level classes are listed in [`TOP_LEVEL`] and registered by
//! [`ResourceRegistry::bigcommerce_v2`](crate::rest::ResourceRegistry::bigcommerce_v2).
//! Nested classes (product images, order shipments, and so on) are only
//! reachable through the sub-resource fields of their parents.
//!
//! | Name | URL | Sub-resources |
//! |------|-----|---------------|
//! | `Brands` | `/brands` | |
//! | `Categories` | `/categories` | |
//! | `Countries` | `/countries` | `states` |
//! | `Coupons` | `/coupons` | |
//! | `Customers` | `/customers` | `addresses` |
//! | `Options` | `/options` | `values` |
//! | `OptionSets` | `/optionsets` | `options` |
//! | `OptionValues` | `/options/values` | |
//! | `Orders` | `/orders` | `products`, `shipping_addresses`, `coupons`, `shipments` |
//! | `Products` | `/products` | `images`, `skus`, `custom_fields`, `configurable_fields`, `discount_rules`, `videos`, `rules`, `options`, `brand`, `option_set` |

mod catalog;
mod customers;
mod geography;
mod marketing;
mod orders;

pub use catalog::{
    BRANDS, CATEGORIES, OPTIONS, OPTION_SETS, OPTION_SET_OPTIONS, OPTION_VALUES, PRODUCTS,
    PRODUCT_CONFIGURABLE_FIELDS, PRODUCT_CUSTOM_FIELDS, PRODUCT_DISCOUNT_RULES, PRODUCT_IMAGES,
    PRODUCT_OPTIONS, PRODUCT_RULES, PRODUCT_SKUS, PRODUCT_VIDEOS,
};
pub use customers::{CUSTOMERS, CUSTOMER_ADDRESSES};
pub use geography::{COUNTRIES, COUNTRY_STATES};
pub use marketing::COUPONS;
pub use orders::{ORDERS, ORDER_COUPONS, ORDER_PRODUCTS, ORDER_SHIPMENTS, ORDER_SHIPPING_ADDRESSES};

use crate::rest::ResourceClass;

/// Classes that can be created by name.
pub static TOP_LEVEL: &[&ResourceClass] = &[
    &BRANDS,
    &CATEGORIES,
    &COUNTRIES,
    &COUPONS,
    &CUSTOMERS,
    &OPTIONS,
    &OPTION_SETS,
    &OPTION_VALUES,
    &ORDERS,
    &PRODUCTS,
];

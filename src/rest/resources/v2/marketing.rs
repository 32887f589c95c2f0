//! Discount coupons.

use crate::rest::{Filter, ResourceClass};

pub static COUPONS: ResourceClass = ResourceClass {
    writeable: &[
        "name",
        "type",
        "amount",
        "min_purchase",
        "expires",
        "enabled",
        "code",
        "applies_to",
        "max_uses",
        "max_uses_per_customer",
        "restricted_to",
        "shipping_methods",
    ],
    read_only: &["id", "num_uses", "date_created"],
    filters: Some(&[
        Filter::number("id"),
        Filter::string("code"),
        Filter::string("name"),
        Filter::string("type"),
    ]),
    ..ResourceClass::named("Coupons")
};

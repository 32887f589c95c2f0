//! Customers and their address books.

use crate::rest::{Filter, ResourceClass, SubResource};

pub static CUSTOMERS: ResourceClass = ResourceClass {
    writeable: &[
        "company",
        "first_name",
        "last_name",
        "email",
        "phone",
        "store_credit",
        "registration_ip_address",
        "customer_group_id",
        "notes",
        "tax_exempt_category",
        "_authentication",
    ],
    read_only: &["id", "date_created", "date_modified"],
    sub_resources: &[SubResource::many("addresses", &CUSTOMER_ADDRESSES)],
    filters: Some(&[
        Filter::number("id"),
        Filter::string("first_name"),
        Filter::string("last_name"),
        Filter::string("company"),
        Filter::string("email"),
        Filter::string("phone"),
        Filter::number("store_credit"),
        Filter::number("customer_group_id"),
        Filter::date("date_created"),
        Filter::date("date_modified"),
    ]),
    ..ResourceClass::named("Customers")
};

pub static CUSTOMER_ADDRESSES: ResourceClass = ResourceClass {
    writeable: &[
        "first_name",
        "last_name",
        "company",
        "street_1",
        "street_2",
        "city",
        "state",
        "zip",
        "country",
        "phone",
    ],
    read_only: &["id", "customer_id", "country_iso2"],
    ..ResourceClass::named("CustomerAddresses")
};

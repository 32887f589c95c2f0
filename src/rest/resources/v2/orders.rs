//! Orders and the records nested under them.

use crate::rest::{Filter, ResourceClass, SubResource};

/// An order. `billing_address` arrives inline and resolves to a mapping.
pub static ORDERS: ResourceClass = ResourceClass {
    writeable: &[
        "status_id",
        "customer_id",
        "billing_address",
        "shipping_addresses",
        "products",
        "base_shipping_cost",
        "shipping_cost_ex_tax",
        "shipping_cost_inc_tax",
        "handling_cost_ex_tax",
        "handling_cost_inc_tax",
        "discount_amount",
        "is_email_opt_in",
        "customer_message",
        "staff_notes",
        "external_source",
        "payment_method",
    ],
    read_only: &[
        "id",
        "date_created",
        "date_modified",
        "date_shipped",
        "status",
        "subtotal_ex_tax",
        "subtotal_inc_tax",
        "total_ex_tax",
        "total_inc_tax",
        "items_total",
        "items_shipped",
        "refunded_amount",
        "currency_code",
        "ip_address",
    ],
    sub_resources: &[
        SubResource::many("products", &ORDER_PRODUCTS),
        SubResource::many("shipping_addresses", &ORDER_SHIPPING_ADDRESSES),
        SubResource::many("coupons", &ORDER_COUPONS),
        SubResource::many("shipments", &ORDER_SHIPMENTS),
    ],
    filters: Some(&[
        Filter::number("id"),
        Filter::number("total"),
        Filter::number("customer_id"),
        Filter::number("status_id"),
        Filter::boolean("is_deleted"),
        Filter::string("payment_method"),
        Filter::date("date_created"),
        Filter::date("date_modified"),
    ]),
    ..ResourceClass::named("Orders")
};

pub static ORDER_PRODUCTS: ResourceClass = ResourceClass {
    read_only: &[
        "id",
        "order_id",
        "product_id",
        "order_address_id",
        "name",
        "sku",
        "quantity",
        "base_price",
        "price_ex_tax",
        "price_inc_tax",
        "total_ex_tax",
        "total_inc_tax",
        "quantity_shipped",
        "product_options",
    ],
    ..ResourceClass::named("OrderProducts")
};

pub static ORDER_SHIPPING_ADDRESSES: ResourceClass = ResourceClass {
    read_only: &[
        "id",
        "order_id",
        "first_name",
        "last_name",
        "company",
        "street_1",
        "street_2",
        "city",
        "zip",
        "country",
        "country_iso2",
        "state",
        "email",
        "phone",
        "items_total",
        "items_shipped",
        "shipping_method",
    ],
    ..ResourceClass::named("OrderShippingAddresses")
};

pub static ORDER_COUPONS: ResourceClass = ResourceClass {
    read_only: &["id", "coupon_id", "order_id", "code", "amount", "type", "discount"],
    ..ResourceClass::named("OrderCoupons")
};

pub static ORDER_SHIPMENTS: ResourceClass = ResourceClass {
    writeable: &[
        "order_address_id",
        "tracking_number",
        "shipping_method",
        "comments",
        "items",
    ],
    read_only: &["id", "order_id", "customer_id", "date_created", "billing_address", "shipping_address"],
    ..ResourceClass::named("OrderShipments")
};

//! Catalog resources: products, brands, categories, and product options.

use crate::rest::{Filter, ResourceClass, SubResource};

/// A product in the catalog.
pub static PRODUCTS: ResourceClass = ResourceClass {
    writeable: &[
        "name",
        "type",
        "sku",
        "description",
        "search_keywords",
        "availability_description",
        "price",
        "cost_price",
        "retail_price",
        "sale_price",
        "sort_order",
        "is_visible",
        "is_featured",
        "related_products",
        "inventory_level",
        "inventory_warning_level",
        "warranty",
        "weight",
        "width",
        "height",
        "depth",
        "fixed_cost_shipping_price",
        "is_free_shipping",
        "inventory_tracking",
        "categories",
        "brand_id",
        "option_set_id",
        "option_set_display",
        "availability",
        "page_title",
        "meta_keywords",
        "meta_description",
        "layout_file",
        "is_price_hidden",
        "price_hidden_label",
        "custom_url",
        "condition",
        "is_condition_shown",
        "upc",
        "is_preorder_only",
        "preorder_release_date",
        "preorder_message",
    ],
    read_only: &[
        "id",
        "date_created",
        "date_modified",
        "date_last_imported",
        "rating_total",
        "rating_count",
        "total_sold",
        "view_count",
        "calculated_price",
        "primary_image",
    ],
    sub_resources: &[
        SubResource::many("images", &PRODUCT_IMAGES),
        SubResource::many("skus", &PRODUCT_SKUS),
        SubResource::many("custom_fields", &PRODUCT_CUSTOM_FIELDS),
        SubResource::many("configurable_fields", &PRODUCT_CONFIGURABLE_FIELDS),
        SubResource::many("discount_rules", &PRODUCT_DISCOUNT_RULES),
        SubResource::many("videos", &PRODUCT_VIDEOS),
        SubResource::many("rules", &PRODUCT_RULES),
        SubResource::many("options", &PRODUCT_OPTIONS),
        SubResource::single("brand", &BRANDS),
        SubResource::single("option_set", &OPTION_SETS),
    ],
    filters: Some(&[
        Filter::number("id"),
        Filter::string("name"),
        Filter::string("keyword_filter"),
        Filter::string("description"),
        Filter::string("sku"),
        Filter::string("condition"),
        Filter::string("availability"),
        Filter::number("brand_id"),
        Filter::number("category"),
        Filter::date("date_created"),
        Filter::date("date_modified"),
        Filter::date("date_last_imported"),
        Filter::number("price"),
        Filter::number("weight"),
        Filter::number("inventory_level"),
        Filter::boolean("is_visible"),
        Filter::boolean("is_featured"),
        Filter::boolean("is_free_shipping"),
    ]),
    ..ResourceClass::named("Products")
};

pub static PRODUCT_IMAGES: ResourceClass = ResourceClass {
    writeable: &["image_file", "is_thumbnail", "sort_order", "description"],
    read_only: &["id", "product_id", "date_created", "zoom_url", "standard_url", "thumbnail_url", "tiny_url"],
    ..ResourceClass::named("ProductImages")
};

pub static PRODUCT_SKUS: ResourceClass = ResourceClass {
    writeable: &[
        "sku",
        "cost_price",
        "upc",
        "inventory_level",
        "inventory_warning_level",
        "bin_picking_number",
        "options",
    ],
    read_only: &["id", "product_id"],
    ..ResourceClass::named("ProductSkus")
};

pub static PRODUCT_CUSTOM_FIELDS: ResourceClass = ResourceClass {
    writeable: &["name", "text"],
    read_only: &["id", "product_id"],
    ..ResourceClass::named("ProductCustomFields")
};

pub static PRODUCT_CONFIGURABLE_FIELDS: ResourceClass = ResourceClass {
    writeable: &[
        "name",
        "type",
        "allowed_file_types",
        "max_size",
        "select_options",
        "is_required",
        "sort_order",
    ],
    read_only: &["id", "product_id"],
    ..ResourceClass::named("ProductConfigurableFields")
};

pub static PRODUCT_DISCOUNT_RULES: ResourceClass = ResourceClass {
    writeable: &["min", "max", "type", "type_value"],
    read_only: &["id", "product_id"],
    ..ResourceClass::named("ProductDiscountRules")
};

pub static PRODUCT_VIDEOS: ResourceClass = ResourceClass {
    writeable: &["url"],
    read_only: &["id", "product_id", "sort_order", "name"],
    ..ResourceClass::named("ProductVideos")
};

pub static PRODUCT_RULES: ResourceClass = ResourceClass {
    writeable: &[
        "sort_order",
        "is_enabled",
        "is_stop",
        "price_adjuster",
        "weight_adjuster",
        "is_purchasing_disabled",
        "purchasing_disabled_message",
        "is_purchasing_hidden",
        "image_file",
        "conditions",
    ],
    read_only: &["id", "product_id"],
    ..ResourceClass::named("ProductRules")
};

pub static PRODUCT_OPTIONS: ResourceClass = ResourceClass {
    read_only: &["id", "option_id", "display_name", "sort_order", "is_required"],
    ..ResourceClass::named("ProductOptions")
};

pub static BRANDS: ResourceClass = ResourceClass {
    writeable: &["name", "page_title", "meta_keywords", "meta_description", "image_file", "search_keywords"],
    read_only: &["id"],
    filters: Some(&[Filter::string("name")]),
    ..ResourceClass::named("Brands")
};

pub static CATEGORIES: ResourceClass = ResourceClass {
    writeable: &[
        "parent_id",
        "name",
        "description",
        "sort_order",
        "page_title",
        "meta_keywords",
        "meta_description",
        "layout_file",
        "image_file",
        "is_visible",
        "search_keywords",
        "url",
    ],
    read_only: &["id", "parent_category_list"],
    filters: Some(&[
        Filter::string("name"),
        Filter::number("parent_id"),
        Filter::string("page_title"),
        Filter::string("keywords"),
        Filter::boolean("is_visible"),
    ]),
    ..ResourceClass::named("Categories")
};

/// An option shared between products (a colour, a size).
pub static OPTIONS: ResourceClass = ResourceClass {
    writeable: &["name", "display_name", "type"],
    read_only: &["id"],
    sub_resources: &[SubResource::many("values", &OPTION_VALUES)],
    filters: Some(&[
        Filter::string("name"),
        Filter::string("display_name"),
        Filter::string("type"),
    ]),
    ..ResourceClass::named("Options")
};

/// A value of an option. Listed under `/options/values`.
pub static OPTION_VALUES: ResourceClass = ResourceClass {
    writeable: &["label", "sort_order", "value"],
    read_only: &["id", "option_id"],
    ..ResourceClass::named("OptionValues")
};

pub static OPTION_SETS: ResourceClass = ResourceClass {
    writeable: &["name"],
    read_only: &["id"],
    sub_resources: &[SubResource::many("options", &OPTION_SET_OPTIONS)],
    filters: Some(&[Filter::string("name")]),
    ..ResourceClass::named("OptionSets")
};

pub static OPTION_SET_OPTIONS: ResourceClass = ResourceClass {
    writeable: &["option_id", "display_name", "sort_order", "is_required"],
    read_only: &["id", "option_set_id"],
    sub_resources: &[SubResource::single("option", &OPTIONS)],
    ..ResourceClass::named("OptionSetOptions")
};

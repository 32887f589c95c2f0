//! Countries and their states. Both are read-only in the store API.

use crate::rest::{Filter, ResourceClass, SubResource};

pub static COUNTRIES: ResourceClass = ResourceClass {
    read_only: &["id", "country", "country_iso2", "country_iso3"],
    sub_resources: &[SubResource::many("states", &COUNTRY_STATES)],
    filters: Some(&[
        Filter::string("country"),
        Filter::string("country_iso2"),
        Filter::string("country_iso3"),
    ]),
    ..ResourceClass::named("Countries")
};

pub static COUNTRY_STATES: ResourceClass = ResourceClass {
    read_only: &["id", "state", "state_abbreviation", "country_id"],
    filters: Some(&[Filter::string("state"), Filter::string("state_abbreviation")]),
    ..ResourceClass::named("CountryStates")
};

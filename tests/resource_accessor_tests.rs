//! Integration tests for resource accessors over HTTP.
//!
//! These tests verify name resolution, lazy paging, single-record fetches
//! and counts against a mock store.

use bigcommerce_api::rest::{EnumerateParams, ResourceError, StoreApi};
use bigcommerce_api::{ApiToken, ApiUser, BigCommerceConfig, RestClient, StoreUrl};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a store API pointing at the mock server.
fn create_api(server: &MockServer) -> StoreApi<RestClient> {
    let config = BigCommerceConfig::builder()
        .store_url(StoreUrl::new(server.uri()).unwrap())
        .api_user(ApiUser::new("admin").unwrap())
        .api_token(ApiToken::new("secret").unwrap())
        .build()
        .unwrap();
    StoreApi::from_config(&config).unwrap()
}

fn products(ids: std::ops::RangeInclusive<u64>) -> Value {
    Value::Array(
        ids.map(|id| json!({"id": id, "name": format!("Product {id}")}))
            .collect(),
    )
}

/// Serves six products in pages of `limit`, answering 204 past the end.
async fn mount_six_products(server: &MockServer, limit: u64) {
    let pages = 6_u64.div_ceil(limit);
    for page in 1..=pages {
        let first = (page - 1) * limit + 1;
        let last = (page * limit).min(6);
        Mock::given(method("GET"))
            .and(path("/api/v2/products"))
            .and(query_param("page", page.to_string()))
            .and(query_param("limit", limit.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(products(first..=last)))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .and(query_param("page", (pages + 1).to_string()))
        .respond_with(ResponseTemplate::new(204))
        .mount(server)
        .await;
}

async fn collect_ids(api: &StoreApi<RestClient>, params: EnumerateParams) -> Vec<u64> {
    api.resource("Products")
        .unwrap()
        .enumerate(params)
        .collect_all()
        .await
        .unwrap()
        .iter()
        .map(|product| product.id().and_then(Value::as_u64).unwrap())
        .collect()
}

// ============================================================================
// Resolution
// ============================================================================

#[tokio::test]
async fn test_unknown_resource_name_fails_resolution() {
    let server = MockServer::start().await;
    let api = create_api(&server);

    let result = api.resource("Bogus");

    assert!(matches!(result, Err(ResourceError::Resolution { name }) if name == "Bogus"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Enumeration
// ============================================================================

#[tokio::test]
async fn test_enumerate_pages_through_all_records() {
    let server = MockServer::start().await;
    mount_six_products(&server, 4).await;
    let api = create_api(&server);

    let ids = collect_ids(&api, EnumerateParams::new().max_per_page(4)).await;

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_enumerate_two_full_pages_then_empty_page() {
    let server = MockServer::start().await;
    mount_six_products(&server, 3).await;
    let api = create_api(&server);

    let ids = collect_ids(&api, EnumerateParams::new().max_per_page(3)).await;

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    let pages: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.into_owned())
        })
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_enumerate_start_equals_dropping_prefix() {
    let server = MockServer::start().await;
    mount_six_products(&server, 4).await;
    let api = create_api(&server);

    let all = collect_ids(&api, EnumerateParams::new().max_per_page(4)).await;
    for start in [1, 3, 4, 5] {
        let ids = collect_ids(&api, EnumerateParams::new().start(start).max_per_page(4)).await;
        assert_eq!(ids, all[start..].to_vec(), "start = {start}");
    }
}

#[tokio::test]
async fn test_enumerate_limit_shrinks_page_and_stops() {
    let server = MockServer::start().await;
    mount_six_products(&server, 2).await;
    let api = create_api(&server);

    let ids = collect_ids(&api, EnumerateParams::new().start(2).limit(2)).await;

    assert_eq!(ids, vec![3, 4]);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert!(query.contains(&("page".to_string(), "2".to_string())));
    assert!(query.contains(&("limit".to_string(), "2".to_string())));
}

#[tokio::test]
async fn test_enumerate_never_requests_more_than_250() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products(1..=3)))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let ids = collect_ids(&api, EnumerateParams::new().max_per_page(1000)).await;
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_enumerate_passes_filters_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .and(query_param("page", "1"))
        .and(query_param("min_price", "10"))
        .and(query_param("is_visible", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products(1..=1)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let accessor = api.resource("Products").unwrap();
    let filters = accessor
        .filters()
        .min("price", 10)
        .unwrap()
        .eq("is_visible", true)
        .unwrap();

    let found = accessor
        .enumerate(EnumerateParams::new().query(&filters))
        .collect_all()
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_enumerate_surfaces_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let mut orders = api.resource("Orders").unwrap().enumerate(EnumerateParams::new());

    let first = orders.next().await.unwrap();
    assert!(matches!(first, Err(ResourceError::Rest(ref e)) if e.status() == Some(403)));
    assert!(orders.next().await.is_none());
}

// ============================================================================
// Single records and counts
// ============================================================================

#[tokio::test]
async fn test_get_fetches_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/customers/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 42, "email": "ada@example.com"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let customer = api.resource("Customers").unwrap().get(42).await.unwrap();

    assert_eq!(customer.url(), "/customers/42");
    assert_eq!(
        customer.get("email").and_then(|field| field.as_value()),
        Some(&json!("ada@example.com"))
    );
}

#[tokio::test]
async fn test_get_returns_none_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/42"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let products = api.resource("Products").unwrap();

    assert!(products.get(42).await.is_none());
    assert!(matches!(
        products.try_get(42).await,
        Err(ResourceError::Rest(ref e)) if e.status() == Some(500)
    ));
}

#[tokio::test]
async fn test_try_get_reports_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/products/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let result = api.resource("Products").unwrap().try_get(9).await;

    assert!(matches!(
        result,
        Err(ResourceError::NotFound { resource: "Products", id }) if id == "9"
    ));
}

#[tokio::test]
async fn test_get_count_uses_count_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders/count"))
        .and(query_param("status_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 128})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let orders = api.resource("Orders").unwrap();
    let filters = orders.filters().eq("status_id", 11).unwrap();

    assert_eq!(orders.get_count(Some(&filters)).await.unwrap(), 128);
}

#[tokio::test]
async fn test_option_values_use_nested_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/options/values"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "label": "Red"}])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let values = api
        .resource("OptionValues")
        .unwrap()
        .enumerate(EnumerateParams::new().limit(1))
        .collect_all()
        .await
        .unwrap();

    assert_eq!(values[0].url(), "/options/values/1");
}

//! Accessors for collections of records.
//!
//! A [`ResourceAccessor`] is bound to one resource class and one base URL.
//! Top-level accessors are created by name through a
//! [`ResourceRegistry`]; nested accessors are created by
//! [`ResourceObject`] when it resolves a sub-resource field.
//!
//! # Paging
//!
//! [`ResourceAccessor::enumerate`] returns an [`Enumeration`], a cursor that
//! requests pages lazily. The page size is the smallest of 250, the
//! caller's `max_per_page`, and the requested `limit`. Pages are numbered
//! from 1; the first page requested is `start / page_size + 1` and the
//! first `start % page_size` records of it are skipped.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::Connection;
use crate::rest::{
    FilterSet, Parent, Query, ResourceClass, ResourceError, ResourceObject, ResourceRegistry,
};

/// Largest page the store serves.
pub const MAX_PAGE_SIZE: usize = 250;

/// Page size used when the caller does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Option values live under `/options/values`, not `/optionvalues`.
const OPTION_VALUES: &str = "OptionValues";
const OPTION_VALUES_URL: &str = "/options/values";

/// Parameters for [`ResourceAccessor::enumerate`].
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::EnumerateParams;
///
/// let params = EnumerateParams::new().start(10).limit(5).max_per_page(100);
/// assert_eq!(params.start, 10);
/// assert_eq!(params.limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerateParams {
    /// Index of the first record to yield.
    pub start: usize,
    /// Number of records to yield; `0` means all.
    pub limit: usize,
    /// Upper bound on the page size.
    pub max_per_page: usize,
    query: HashMap<String, String>,
}

impl Default for EnumerateParams {
    fn default() -> Self {
        Self {
            start: 0,
            limit: 0,
            max_per_page: DEFAULT_PAGE_SIZE,
            query: HashMap::new(),
        }
    }
}

impl EnumerateParams {
    /// Creates parameters that enumerate every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the index of the first record.
    #[must_use]
    pub const fn start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets the number of records to yield (`0` for all).
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the upper bound on the page size.
    #[must_use]
    pub const fn max_per_page(mut self, max_per_page: usize) -> Self {
        self.max_per_page = max_per_page;
        self
    }

    /// Merges the parameters of `query` into every page request.
    #[must_use]
    pub fn query(mut self, query: &dyn Query) -> Self {
        self.query.extend(query.query_dict());
        self
    }

    /// Returns the query parameters collected so far.
    #[must_use]
    pub const fn query_dict(&self) -> &HashMap<String, String> {
        &self.query
    }
}

/// Fetches, enumerates and counts records of one resource class.
pub struct ResourceAccessor<C> {
    class: &'static ResourceClass,
    connection: Arc<C>,
    url: String,
    parent: Option<Parent>,
}

impl<C> Clone for ResourceAccessor<C> {
    fn clone(&self) -> Self {
        Self {
            class: self.class,
            connection: Arc::clone(&self.connection),
            url: self.url.clone(),
            parent: self.parent.clone(),
        }
    }
}

impl<C> fmt::Debug for ResourceAccessor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceAccessor")
            .field("resource", &self.class.name)
            .field("url", &self.url)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

impl<C: Connection> ResourceAccessor<C> {
    /// Creates an accessor for the resource registered under `name`.
    ///
    /// The class is resolved before the connection is consulted, so an
    /// unknown name fails without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Resolution`] if `name` is not registered.
    pub fn new(
        name: &str,
        connection: Arc<C>,
        registry: &ResourceRegistry,
    ) -> Result<Self, ResourceError> {
        let class = registry.resolve(name)?;

        let url = if name == OPTION_VALUES {
            OPTION_VALUES_URL.to_string()
        } else {
            connection.get_resource_url(&name.to_lowercase())
        };

        tracing::debug!(resource = name, url = %url, "created resource accessor");

        Ok(Self {
            class,
            connection,
            url,
            parent: None,
        })
    }

    /// Creates an accessor for a nested collection.
    ///
    /// `location` is the sub-resource field's raw value: either a URL string
    /// or an object whose `resource` key holds the URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidSubResource`] if `location` has
    /// neither form.
    pub fn nested(
        class: &'static ResourceClass,
        location: &Value,
        connection: Arc<C>,
        parent: Option<Parent>,
    ) -> Result<Self, ResourceError> {
        let url = match location {
            Value::String(url) => url.clone(),
            Value::Object(link) => match link.get("resource") {
                Some(Value::String(url)) => url.clone(),
                _ => {
                    return Err(ResourceError::InvalidSubResource {
                        resource: class.name,
                        location: location.to_string(),
                    })
                }
            },
            _ => {
                return Err(ResourceError::InvalidSubResource {
                    resource: class.name,
                    location: location.to_string(),
                })
            }
        };

        Ok(Self {
            class,
            connection,
            url,
            parent,
        })
    }

    /// Returns the resource class.
    #[must_use]
    pub const fn class(&self) -> &'static ResourceClass {
        self.class
    }

    /// Returns the base URL path.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the owning record, for nested accessors.
    #[must_use]
    pub const fn parent(&self) -> Option<&Parent> {
        self.parent.as_ref()
    }

    /// Returns the connection.
    #[must_use]
    pub const fn connection(&self) -> &Arc<C> {
        &self.connection
    }

    /// Starts a lazy enumeration of records.
    ///
    /// No request is made until the first call to [`Enumeration::next`].
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut products = accessor.enumerate(EnumerateParams::new().limit(10));
    /// while let Some(product) = products.next().await {
    ///     println!("{}", product?.url());
    /// }
    /// ```
    #[must_use]
    pub fn enumerate(&self, params: EnumerateParams) -> Enumeration<C> {
        Enumeration::new(self.clone(), params)
    }

    /// Fetches the record with the given id.
    ///
    /// Any failure is logged and reported as `None`. Use
    /// [`ResourceAccessor::try_get`] to see the error.
    pub async fn get(&self, id: impl fmt::Display) -> Option<ResourceObject<C>> {
        match self.try_get(id).await {
            Ok(object) => Some(object),
            Err(error) => {
                tracing::warn!(
                    resource = self.class.name,
                    url = %self.url,
                    error = %error,
                    "failed to fetch record"
                );
                None
            }
        }
    }

    /// Fetches the record with the given id, reporting failures.
    ///
    /// An empty id fetches the accessor's own URL, which is how single
    /// sub-resources are loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for a 404 or an empty response,
    /// [`ResourceError::MissingId`] if the payload has no id, and
    /// [`ResourceError::Rest`] for other connection failures.
    pub async fn try_get(&self, id: impl fmt::Display) -> Result<ResourceObject<C>, ResourceError> {
        let id = id.to_string();
        let url = format!("{}/{}", self.url, id);

        let record = match self.connection.get(&url, None).await {
            Ok(record) => record,
            Err(error) if error.is_empty_response() || error.status() == Some(404) => {
                return Err(ResourceError::NotFound {
                    resource: self.class.name,
                    id,
                })
            }
            Err(error) => return Err(error.into()),
        };

        self.build(record)
    }

    /// Returns the number of records matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for connection failures and
    /// [`ResourceError::UnexpectedResponse`] if the payload has no numeric
    /// `count`.
    pub async fn get_count(&self, query: Option<&dyn Query>) -> Result<u64, ResourceError> {
        let url = format!("{}/count", self.url);
        let query = query.map(|query| query.query_dict());

        let result = self.connection.get(&url, query).await?;
        result
            .get("count")
            .and_then(Value::as_u64)
            .ok_or(ResourceError::UnexpectedResponse { url })
    }

    /// Returns a filter-set builder for this resource class.
    ///
    /// Classes without filter declarations yield an empty set.
    #[must_use]
    pub fn filters(&self) -> FilterSet {
        self.class.filter_set().unwrap_or_default()
    }

    fn build(&self, record: Value) -> Result<ResourceObject<C>, ResourceError> {
        ResourceObject::new(
            Arc::clone(&self.connection),
            self.class,
            &self.url,
            record,
            self.parent.clone(),
        )
    }
}

/// A lazy, page-by-page enumeration of records.
///
/// Created by [`ResourceAccessor::enumerate`]. Each call to
/// [`Enumeration::next`] yields one record, fetching the next page when the
/// current one is used up. The enumeration ends when the requested number
/// of records has been yielded, when the store answers with no content or
/// an empty page, or after the first error.
pub struct Enumeration<C> {
    accessor: ResourceAccessor<C>,
    query: HashMap<String, String>,
    page_size: usize,
    current_page: usize,
    offset: usize,
    remaining: Option<usize>,
    buffer: VecDeque<Value>,
    finished: bool,
}

impl<C> fmt::Debug for Enumeration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumeration")
            .field("accessor", &self.accessor)
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("remaining", &self.remaining)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<C: Connection> Enumeration<C> {
    fn new(accessor: ResourceAccessor<C>, params: EnumerateParams) -> Self {
        let remaining = (params.limit > 0).then_some(params.limit);
        let page_size = MAX_PAGE_SIZE
            .min(params.max_per_page.max(1))
            .min(remaining.unwrap_or(usize::MAX));

        Self {
            accessor,
            query: params.query,
            page_size,
            current_page: params.start / page_size,
            offset: params.start % page_size,
            remaining,
            buffer: VecDeque::new(),
            finished: false,
        }
    }

    /// Returns the number of records requested per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the next record, or `None` once the enumeration is over.
    ///
    /// A connection failure other than the empty-response condition is
    /// returned once as `Some(Err(_))`; the enumeration ends after it.
    pub async fn next(&mut self) -> Option<Result<ResourceObject<C>, ResourceError>> {
        loop {
            if self.finished || self.remaining == Some(0) {
                return None;
            }

            if let Some(record) = self.buffer.pop_front() {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                let object = self.accessor.build(record);
                if object.is_err() {
                    self.finished = true;
                }
                return Some(object);
            }

            if let Err(error) = self.fetch_page().await {
                self.finished = true;
                return Some(Err(error));
            }
        }
    }

    /// Drains the enumeration into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first error the enumeration yields.
    pub async fn collect_all(mut self) -> Result<Vec<ResourceObject<C>>, ResourceError> {
        let mut objects = Vec::new();
        while let Some(object) = self.next().await {
            objects.push(object?);
        }
        Ok(objects)
    }

    async fn fetch_page(&mut self) -> Result<(), ResourceError> {
        self.current_page += 1;

        let mut query = HashMap::from([
            ("page".to_string(), self.current_page.to_string()),
            ("limit".to_string(), self.page_size.to_string()),
        ]);
        query.extend(self.query.iter().map(|(k, v)| (k.clone(), v.clone())));

        tracing::debug!(
            resource = self.accessor.class.name,
            url = %self.accessor.url,
            page = self.current_page,
            limit = self.page_size,
            "fetching page"
        );

        match self.accessor.connection.get(&self.accessor.url, Some(query)).await {
            Ok(Value::Array(records)) => {
                if records.is_empty() {
                    self.finished = true;
                } else {
                    let skip = std::mem::take(&mut self.offset);
                    self.buffer.extend(records.into_iter().skip(skip));
                }
                Ok(())
            }
            Ok(_) => Err(ResourceError::UnexpectedResponse {
                url: self.accessor.url.clone(),
            }),
            Err(error) if error.is_empty_response() => {
                tracing::debug!(url = %self.accessor.url, "no more records");
                self.finished = true;
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::MemoryConnection;
    use crate::rest::{Filter, SubResource};
    use serde_json::json;

    static WIDGETS: ResourceClass = ResourceClass {
        filters: Some(&[Filter::string("name"), Filter::number("price")]),
        ..ResourceClass::named("Widgets")
    };

    static GADGETS: ResourceClass = ResourceClass {
        sub_resources: &[SubResource::many("parts", &WIDGETS)],
        ..ResourceClass::named("Gadgets")
    };

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new().with(&WIDGETS).with(&GADGETS)
    }

    fn widgets(count: usize) -> Vec<Value> {
        (1..=count)
            .map(|id| json!({"id": id, "name": format!("Widget {id}")}))
            .collect()
    }

    fn accessor(
        connection: MemoryConnection,
    ) -> (Arc<MemoryConnection>, ResourceAccessor<MemoryConnection>) {
        let connection = Arc::new(connection);
        let accessor =
            ResourceAccessor::new("Widgets", Arc::clone(&connection), &registry()).unwrap();
        (connection, accessor)
    }

    async fn ids(enumeration: Enumeration<MemoryConnection>) -> Vec<u64> {
        enumeration
            .collect_all()
            .await
            .unwrap()
            .iter()
            .map(|object| object.id().and_then(Value::as_u64).unwrap())
            .collect()
    }

    #[test]
    fn test_new_uses_lowercase_resource_url() {
        let (_, accessor) = accessor(MemoryConnection::new());
        assert_eq!(accessor.url(), "/widgets");
        assert_eq!(accessor.class().name, "Widgets");
        assert!(accessor.parent().is_none());
    }

    #[test]
    fn test_unknown_name_fails_without_touching_connection() {
        let connection = Arc::new(MemoryConnection::new());
        let result = ResourceAccessor::new("Bogus", Arc::clone(&connection), &registry());

        assert!(matches!(result, Err(ResourceError::Resolution { name }) if name == "Bogus"));
        assert!(connection.calls().is_empty());
    }

    #[test]
    fn test_option_values_url_override() {
        static OPTION_VALUES_CLASS: ResourceClass = ResourceClass::named("OptionValues");
        let registry = ResourceRegistry::new().with(&OPTION_VALUES_CLASS);
        let accessor =
            ResourceAccessor::new("OptionValues", Arc::new(MemoryConnection::new()), &registry)
                .unwrap();
        assert_eq!(accessor.url(), "/options/values");
    }

    #[test]
    fn test_nested_accepts_string_or_resource_link() {
        let connection = Arc::new(MemoryConnection::new());

        let from_string =
            ResourceAccessor::nested(&WIDGETS, &json!("/gadgets/1/parts"), Arc::clone(&connection), None)
                .unwrap();
        assert_eq!(from_string.url(), "/gadgets/1/parts");

        let link = json!({"url": "https://store/api/v2/gadgets/1/parts.json", "resource": "/gadgets/1/parts"});
        let from_link =
            ResourceAccessor::nested(&WIDGETS, &link, Arc::clone(&connection), None).unwrap();
        assert_eq!(from_link.url(), "/gadgets/1/parts");

        let invalid = ResourceAccessor::nested(&WIDGETS, &json!(42), connection, None);
        assert!(matches!(invalid, Err(ResourceError::InvalidSubResource { .. })));
    }

    #[test]
    fn test_page_size_is_capped() {
        let (_, accessor) = accessor(MemoryConnection::new());

        assert_eq!(accessor.enumerate(EnumerateParams::new()).page_size(), 50);
        assert_eq!(
            accessor
                .enumerate(EnumerateParams::new().max_per_page(1000))
                .page_size(),
            250
        );
        assert_eq!(
            accessor
                .enumerate(EnumerateParams::new().max_per_page(100).limit(7))
                .page_size(),
            7
        );
        assert_eq!(
            accessor
                .enumerate(EnumerateParams::new().max_per_page(0))
                .page_size(),
            1
        );
    }

    #[tokio::test]
    async fn test_enumerate_yields_all_records_in_order() {
        let (connection, accessor) =
            accessor(MemoryConnection::new().with_collection("/widgets", widgets(6)));

        let ids = ids(accessor.enumerate(EnumerateParams::new().max_per_page(4))).await;
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        // Two full pages then the empty response that ends the enumeration.
        let calls = connection.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].query["page"], "1");
        assert_eq!(calls[0].query["limit"], "4");
        assert_eq!(calls[1].query["page"], "2");
        assert_eq!(calls[2].query["page"], "3");
    }

    #[tokio::test]
    async fn test_enumerate_start_skips_into_page() {
        let (connection, accessor) =
            accessor(MemoryConnection::new().with_collection("/widgets", widgets(6)));

        let ids = ids(accessor.enumerate(EnumerateParams::new().start(5).max_per_page(2))).await;
        assert_eq!(ids, vec![6]);
        assert_eq!(connection.calls()[0].query["page"], "3");
    }

    #[tokio::test]
    async fn test_enumerate_start_matches_dropping_prefix() {
        let (_, accessor) =
            accessor(MemoryConnection::new().with_collection("/widgets", widgets(6)));

        let all = ids(accessor.enumerate(EnumerateParams::new().max_per_page(4))).await;
        for start in 0..=6 {
            let skipped = ids(accessor.enumerate(EnumerateParams::new().start(start).max_per_page(4))).await;
            assert_eq!(skipped, all[start..].to_vec(), "start = {start}");
        }
    }

    #[tokio::test]
    async fn test_enumerate_limit_stops_without_extra_request() {
        let (connection, accessor) =
            accessor(MemoryConnection::new().with_collection("/widgets", widgets(6)));

        let ids = ids(accessor.enumerate(EnumerateParams::new().limit(3))).await;
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(connection.calls().len(), 1);
        assert_eq!(connection.calls()[0].query["limit"], "3");
    }

    #[tokio::test]
    async fn test_enumerate_merges_query_parameters() {
        let (connection, accessor) =
            accessor(MemoryConnection::new().with_collection("/widgets", widgets(2)));

        let filters = accessor.filters().eq("name", "Widget 1").unwrap();
        let _ = ids(accessor.enumerate(EnumerateParams::new().query(&filters))).await;

        let call = &connection.calls()[0];
        assert_eq!(call.query["name"], "Widget 1");
        assert_eq!(call.query["page"], "1");
    }

    #[tokio::test]
    async fn test_enumerate_yields_transport_error_once() {
        let (_, accessor) = accessor(MemoryConnection::new());
        let mut enumeration = accessor.enumerate(EnumerateParams::new());

        assert!(matches!(
            enumeration.next().await,
            Some(Err(ResourceError::Rest(_)))
        ));
        assert!(enumeration.next().await.is_none());
    }

    #[tokio::test]
    async fn test_enumerate_rejects_non_array_page() {
        let (_, accessor) =
            accessor(MemoryConnection::new().with_record("/widgets", json!({"id": 1})));
        let mut enumeration = accessor.enumerate(EnumerateParams::new());

        assert!(matches!(
            enumeration.next().await,
            Some(Err(ResourceError::UnexpectedResponse { .. }))
        ));
        assert!(enumeration.next().await.is_none());
    }

    #[tokio::test]
    async fn test_get_builds_object_with_record_url() {
        let (connection, accessor) = accessor(
            MemoryConnection::new().with_record("/widgets/42", json!({"id": 42, "name": "Answer"})),
        );

        let object = accessor.get(42).await.unwrap();
        assert_eq!(object.url(), "/widgets/42");
        assert_eq!(connection.calls_to("/widgets/42"), 1);
    }

    #[tokio::test]
    async fn test_get_swallows_failures() {
        let (_, accessor) = accessor(MemoryConnection::new());
        assert!(accessor.get(42).await.is_none());
    }

    #[tokio::test]
    async fn test_try_get_maps_404_to_not_found() {
        let (_, accessor) = accessor(MemoryConnection::new());
        let result = accessor.try_get(42).await;
        assert!(matches!(
            result,
            Err(ResourceError::NotFound { resource: "Widgets", id }) if id == "42"
        ));
    }

    #[tokio::test]
    async fn test_try_get_requires_an_id() {
        let (_, accessor) =
            accessor(MemoryConnection::new().with_record("/widgets/1", json!({"name": "x"})));
        assert!(matches!(
            accessor.try_get(1).await,
            Err(ResourceError::MissingId { resource: "Widgets" })
        ));
    }

    #[tokio::test]
    async fn test_get_count_reads_count_field() {
        let (connection, accessor) =
            accessor(MemoryConnection::new().with_record("/widgets/count", json!({"count": 17})));

        let filters = accessor.filters().min("price", 5).unwrap();
        assert_eq!(accessor.get_count(Some(&filters)).await.unwrap(), 17);
        assert_eq!(connection.calls()[0].query["min_price"], "5");
    }

    #[tokio::test]
    async fn test_get_count_without_count_field() {
        let (_, accessor) =
            accessor(MemoryConnection::new().with_record("/widgets/count", json!({"total": 17})));
        assert!(matches!(
            accessor.get_count(None).await,
            Err(ResourceError::UnexpectedResponse { .. })
        ));
    }

    #[test]
    fn test_filters_fall_back_to_empty_set() {
        let accessor =
            ResourceAccessor::new("Gadgets", Arc::new(MemoryConnection::new()), &registry())
                .unwrap();
        assert!(accessor.filters().filters().is_empty());
    }
}

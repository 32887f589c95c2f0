//! Records with lazily resolved fields.
//!
//! A [`ResourceObject`] wraps the JSON fields of one record. Plain values
//! are returned as they arrived. Nested objects are turned into
//! [`Mapping`]s, and fields the class declares as sub-resources are
//! fetched from the store the first time they are resolved. Every result
//! is cached in the record.
//!
//! Pending changes are staged with [`ResourceObject::attr`] and sent with
//! [`ResourceObject::save`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut product = products.get(32).await.expect("product exists");
//!
//! // Fetches /products/32/images once; later reads come from the cache.
//! if let Field::List(images) = product.resolve("images").await? {
//!     println!("{} images", images.len());
//! }
//!
//! product.attr("price", "19.99");
//! product.save().await?;
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::Connection;
use crate::rest::{
    EnumerateParams, Mapping, ResourceAccessor, ResourceClass, ResourceError, SubResource,
};

/// The record a nested accessor or object belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    /// The class name of the owning record.
    pub resource: &'static str,
    /// The URL of the owning record.
    pub url: String,
}

/// A field value in one of its resolution states.
pub enum Field<C> {
    /// The value as it arrived from the store.
    Raw(Value),
    /// A nested object exposed by attribute name.
    Mapping(Mapping),
    /// A fetched single sub-resource; `None` if the fetch failed.
    Single(Option<ResourceObject<C>>),
    /// A fetched sub-resource collection.
    List(Vec<ResourceObject<C>>),
}

impl<C> Field<C> {
    /// Returns the raw value, if the field has not been resolved into
    /// something else.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the mapping, if the field resolved to one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the fetched record of a single sub-resource.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ResourceObject<C>> {
        match self {
            Self::Single(Some(object)) => Some(object),
            _ => None,
        }
    }

    /// Returns the fetched records of a sub-resource collection.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ResourceObject<C>]> {
        match self {
            Self::List(objects) => Some(objects.as_slice()),
            _ => None,
        }
    }

    /// Renders the field as JSON, recursing into fetched records.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Raw(value) => value.clone(),
            Self::Mapping(mapping) => Value::Object(mapping.as_map().clone()),
            Self::Single(Some(object)) => object.to_json(),
            Self::Single(None) => Value::Null,
            Self::List(objects) => {
                Value::Array(objects.iter().map(ResourceObject::to_json).collect())
            }
        }
    }
}

impl<C> fmt::Debug for Field<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
            Self::Mapping(mapping) => f.debug_tuple("Mapping").field(mapping).finish(),
            Self::Single(object) => f.debug_tuple("Single").field(object).finish(),
            Self::List(objects) => f.debug_tuple("List").field(objects).finish(),
        }
    }
}

/// One record of a resource class.
pub struct ResourceObject<C> {
    connection: Arc<C>,
    class: &'static ResourceClass,
    url: String,
    fields: BTreeMap<String, Field<C>>,
    updates: Map<String, Value>,
    parent: Option<Parent>,
}

impl<C> fmt::Debug for ResourceObject<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceObject")
            .field("resource", &self.class.name)
            .field("url", &self.url)
            .field("fields", &self.fields)
            .field("updates", &self.updates)
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for ResourceObject<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl<C> ResourceObject<C> {
    /// Wraps the fields of one record.
    ///
    /// The record URL is `base_url/id`. String ids are used verbatim, other
    /// ids in their JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if `fields` is not an object or
    /// has no non-null `id`.
    pub fn new(
        connection: Arc<C>,
        class: &'static ResourceClass,
        base_url: &str,
        fields: Value,
        parent: Option<Parent>,
    ) -> Result<Self, ResourceError> {
        let Value::Object(fields) = fields else {
            return Err(ResourceError::MissingId {
                resource: class.name,
            });
        };

        let id = match fields.get("id") {
            None | Some(Value::Null) => {
                return Err(ResourceError::MissingId {
                    resource: class.name,
                })
            }
            Some(Value::String(id)) => id.clone(),
            Some(id) => id.to_string(),
        };

        Ok(Self {
            connection,
            class,
            url: format!("{base_url}/{id}"),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name, Field::Raw(value)))
                .collect(),
            updates: Map::new(),
            parent,
        })
    }

    /// Returns the record URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw `id` field.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id").and_then(Field::as_value)
    }

    /// Returns the resource class.
    #[must_use]
    pub const fn class(&self) -> &'static ResourceClass {
        self.class
    }

    /// Returns the owning record, for records reached through a
    /// sub-resource.
    #[must_use]
    pub const fn parent(&self) -> Option<&Parent> {
        self.parent.as_ref()
    }

    /// Returns the fields staged for the next save.
    #[must_use]
    pub const fn updates(&self) -> &Map<String, Value> {
        &self.updates
    }

    /// Returns the class's writeable field names.
    #[must_use]
    pub const fn writeable(&self) -> &'static [&'static str] {
        self.class.writeable
    }

    /// Returns the class's read-only field names.
    #[must_use]
    pub const fn read_only(&self) -> &'static [&'static str] {
        self.class.read_only
    }

    /// Returns a field in its current state without resolving it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field<C>> {
        self.fields.get(name)
    }

    /// Stages `value` for `name`; the record's fields are left untouched.
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.updates.insert(name.into(), value.into());
    }

    /// Logs a create request for this record.
    ///
    /// Nothing is sent to the store.
    pub fn create(&self, data: &Value) {
        tracing::info!(url = %self.url, "Creating {}", self.url);
        tracing::debug!(data = %data, "create payload");
    }

    /// Returns every field in its current state.
    #[must_use]
    pub const fn to_dict(&self) -> &BTreeMap<String, Field<C>> {
        &self.fields
    }

    /// Renders the record as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, field)| (name.clone(), field.to_json()))
                .collect(),
        )
    }

    fn as_parent(&self) -> Parent {
        Parent {
            resource: self.class.name,
            url: self.url.clone(),
        }
    }
}

impl<C: Connection> ResourceObject<C> {
    /// Resolves the field `name` and returns it.
    ///
    /// - A declared sub-resource holding a `{"url", "resource"}` link is
    ///   fetched: a single link becomes [`Field::Single`], a collection is
    ///   enumerated in full into [`Field::List`].
    /// - Any other nested object becomes a [`Field::Mapping`].
    /// - Everything else is returned unchanged.
    ///
    /// The result replaces the raw value, so the store is contacted at most
    /// once per field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::AttributeNotFound`] if the field is absent or
    /// null, and the enumeration error if a sub-resource collection cannot
    /// be fetched.
    ///
    /// A failed single fetch is not an error: it is cached as
    /// `Field::Single(None)` and every later `resolve` of that field returns
    /// `Ok` with the cached `None` without contacting the store again. It
    /// does not report [`ResourceError::AttributeNotFound`] on the second
    /// read.
    pub async fn resolve(&mut self, name: &str) -> Result<&Field<C>, ResourceError> {
        let declared = self.class.sub_resource(name);
        let resource = self.class.name;
        let not_found = || ResourceError::AttributeNotFound {
            resource,
            field: name.to_string(),
        };

        let Some(field) = self.fields.get_mut(name) else {
            return Err(not_found());
        };

        let location = match field {
            Field::Raw(Value::Null) => return Err(not_found()),
            Field::Raw(Value::Object(map)) => {
                if declared.is_some() {
                    Some(Value::Object(map.clone()))
                } else {
                    let map = std::mem::take(map);
                    *field = Field::Mapping(Mapping::new(map));
                    None
                }
            }
            _ => None,
        };

        if let (Some(decl), Some(location)) = (declared, location) {
            let resolved = self.fetch_sub_resource(decl, &location).await?;
            self.fields.insert(name.to_string(), resolved);
        }

        self.fields.get(name).ok_or_else(not_found)
    }

    /// Sends the staged updates to the record URL.
    ///
    /// The staged updates are kept, and the record's fields are not
    /// refreshed from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the update fails.
    pub async fn save(&self) -> Result<Value, ResourceError> {
        let payload = Value::Object(self.updates.clone());
        tracing::info!(url = %self.url, "Updating {}", self.url);
        tracing::info!(data = %payload, "update payload");

        Ok(self.connection.update(&self.url, &self.updates).await?)
    }

    async fn fetch_sub_resource(
        &self,
        decl: &SubResource,
        location: &Value,
    ) -> Result<Field<C>, ResourceError> {
        let accessor = ResourceAccessor::nested(
            decl.klass,
            location,
            Arc::clone(&self.connection),
            Some(self.as_parent()),
        )?;

        tracing::debug!(
            resource = self.class.name,
            field = decl.field,
            url = %accessor.url(),
            single = decl.single,
            "resolving sub-resource"
        );

        if decl.single {
            Ok(Field::Single(accessor.get("").await))
        } else {
            let objects = accessor.enumerate(EnumerateParams::new()).collect_all().await?;
            Ok(Field::List(objects))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::MemoryConnection;
    use serde_json::json;

    static IMAGES: ResourceClass = ResourceClass::named("WidgetImages");
    static MAKERS: ResourceClass = ResourceClass::named("Makers");

    static WIDGETS: ResourceClass = ResourceClass {
        writeable: &["name", "price"],
        read_only: &["id"],
        sub_resources: &[
            SubResource::many("images", &IMAGES),
            SubResource::single("maker", &MAKERS),
        ],
        ..ResourceClass::named("Widgets")
    };

    fn widget(connection: &Arc<MemoryConnection>) -> ResourceObject<MemoryConnection> {
        ResourceObject::new(
            Arc::clone(connection),
            &WIDGETS,
            "/widgets",
            json!({
                "id": 7,
                "name": "Sprocket",
                "description": null,
                "dimensions": {"width": 2, "depth": {"value": 3}},
                "images": {"url": "https://store/api/v2/widgets/7/images.json", "resource": "/widgets/7/images"},
                "maker": {"url": "https://store/api/v2/makers/3.json", "resource": "/makers/3"}
            }),
            None,
        )
        .unwrap()
    }

    fn connection() -> Arc<MemoryConnection> {
        Arc::new(
            MemoryConnection::new()
                .with_collection(
                    "/widgets/7/images",
                    vec![json!({"id": 1, "file": "a.png"}), json!({"id": 2, "file": "b.png"})],
                )
                .with_record("/makers/3/", json!({"id": 3, "name": "Acme"})),
        )
    }

    #[test]
    fn test_new_computes_url_from_id() {
        let connection = connection();
        let object = widget(&connection);
        assert_eq!(object.url(), "/widgets/7");
        assert_eq!(object.id(), Some(&json!(7)));
        assert_eq!(object.writeable(), &["name", "price"]);
        assert_eq!(object.read_only(), &["id"]);
    }

    #[test]
    fn test_new_uses_string_id_verbatim() {
        let object = ResourceObject::new(
            Arc::new(MemoryConnection::new()),
            &WIDGETS,
            "/widgets",
            json!({"id": "abc"}),
            None,
        )
        .unwrap();
        assert_eq!(object.url(), "/widgets/abc");
    }

    #[test]
    fn test_new_requires_id() {
        for fields in [json!({"name": "x"}), json!({"id": null}), json!([1, 2])] {
            let result = ResourceObject::new(
                Arc::new(MemoryConnection::new()),
                &WIDGETS,
                "/widgets",
                fields,
                None,
            );
            assert!(matches!(
                result,
                Err(ResourceError::MissingId { resource: "Widgets" })
            ));
        }
    }

    #[tokio::test]
    async fn test_resolve_plain_value() {
        let connection = connection();
        let mut object = widget(&connection);

        let field = object.resolve("name").await.unwrap();
        assert_eq!(field.as_value(), Some(&json!("Sprocket")));
        assert!(connection.calls().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_absent_or_null_field() {
        let connection = connection();
        let mut object = widget(&connection);

        for name in ["colour", "description"] {
            assert!(matches!(
                object.resolve(name).await,
                Err(ResourceError::AttributeNotFound { field, .. }) if field == name
            ));
        }
    }

    #[tokio::test]
    async fn test_resolve_nested_object_as_mapping_without_fetch() {
        let connection = connection();
        let mut object = widget(&connection);

        let field = object.resolve("dimensions").await.unwrap();
        let mapping = field.as_mapping().unwrap();
        assert_eq!(mapping.get_i64("width"), Some(2));
        assert_eq!(mapping.path("depth.value"), Some(&json!(3)));
        assert!(connection.calls().is_empty());

        // Cached as a mapping.
        assert!(object.get("dimensions").unwrap().as_mapping().is_some());
    }

    #[tokio::test]
    async fn test_resolve_sub_resource_collection_once() {
        let connection = connection();
        let mut object = widget(&connection);

        let images = object.resolve("images").await.unwrap().as_list().unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].url(), "/widgets/7/images/1");
        assert_eq!(
            images[0].parent(),
            Some(&Parent {
                resource: "Widgets",
                url: "/widgets/7".to_string()
            })
        );

        let calls_after_first = connection.calls().len();
        let again = object.resolve("images").await.unwrap();
        assert_eq!(again.as_list().unwrap().len(), 2);
        assert_eq!(connection.calls().len(), calls_after_first);
    }

    #[tokio::test]
    async fn test_resolve_single_sub_resource_once() {
        let connection = connection();
        let mut object = widget(&connection);

        let maker = object.resolve("maker").await.unwrap().as_object().unwrap();
        assert_eq!(maker.get("name").unwrap().as_value(), Some(&json!("Acme")));
        assert_eq!(maker.url(), "/makers/3/3");

        object.resolve("maker").await.unwrap();
        assert_eq!(connection.calls_to("/makers/3/"), 1);
    }

    #[tokio::test]
    async fn test_failed_single_fetch_is_cached_as_none() {
        let connection = Arc::new(MemoryConnection::new());
        let mut object = widget(&connection);

        let field = object.resolve("maker").await.unwrap();
        assert!(matches!(field, Field::Single(None)));
        object.resolve("maker").await.unwrap();
        assert_eq!(connection.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_collection_fetch_leaves_field_raw() {
        let connection = Arc::new(MemoryConnection::new());
        let mut object = widget(&connection);

        assert!(matches!(
            object.resolve("images").await,
            Err(ResourceError::Rest(_))
        ));
        assert!(object.get("images").unwrap().as_value().is_some());
    }

    #[tokio::test]
    async fn test_attr_stages_updates_and_save_sends_them() {
        let connection = connection();
        let mut object = widget(&connection);

        object.attr("name", "Gear");
        object.attr("price", 9.5);
        object.attr("name", "Cog");

        assert_eq!(
            object.get("name").unwrap().as_value(),
            Some(&json!("Sprocket"))
        );

        object.save().await.unwrap();

        let updates = connection.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "/widgets/7");
        assert_eq!(
            Value::Object(updates[0].1.clone()),
            json!({"name": "Cog", "price": 9.5})
        );
        assert_eq!(object.updates().len(), 2);
    }

    #[tokio::test]
    async fn test_save_with_no_updates_sends_empty_body() {
        let connection = connection();
        let object = widget(&connection);

        object.save().await.unwrap();
        assert_eq!(connection.updates()[0].1, Map::new());
    }

    #[test]
    fn test_create_sends_nothing() {
        let connection = connection();
        let object = widget(&connection);

        object.create(&json!({"name": "New"}));
        assert!(connection.calls().is_empty());
        assert!(connection.updates().is_empty());
    }

    #[tokio::test]
    async fn test_to_json_reflects_resolved_fields() {
        let connection = connection();
        let mut object = widget(&connection);
        object.resolve("images").await.unwrap();

        let json = object.to_json();
        assert_eq!(json["images"][1]["file"], json!("b.png"));
        assert_eq!(json["name"], json!("Sprocket"));
        assert_eq!(object.to_dict().len(), 6);
    }
}

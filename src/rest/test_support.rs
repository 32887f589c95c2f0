//! In-memory connection used by the mapper's unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{Map, Value};

use crate::clients::{Connection, HttpError, HttpResponseError, RestError};

/// A recorded `get` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCall {
    pub url: String,
    pub query: HashMap<String, String>,
}

/// Serves collections page by page and single records by URL.
///
/// Collections honour `page` (1-based) and `limit` and answer
/// [`RestError::EmptyResponse`] past the last record. Unknown URLs answer
/// 404.
#[derive(Debug, Default)]
pub struct MemoryConnection {
    collections: HashMap<String, Vec<Value>>,
    records: HashMap<String, Value>,
    calls: Mutex<Vec<GetCall>>,
    updates: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, url: &str, records: Vec<Value>) -> Self {
        self.collections.insert(url.to_string(), records);
        self
    }

    pub fn with_record(mut self, url: &str, record: Value) -> Self {
        self.records.insert(url.to_string(), record);
        self
    }

    pub fn calls(&self) -> Vec<GetCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls().iter().filter(|call| call.url == url).count()
    }

    pub fn updates(&self) -> Vec<(String, Map<String, Value>)> {
        self.updates.lock().unwrap().clone()
    }
}

fn not_found() -> RestError {
    RestError::Http(HttpError::Response(HttpResponseError {
        code: 404,
        message: "The requested resource was not found.".to_string(),
        error_reference: None,
    }))
}

impl Connection for MemoryConnection {
    async fn get(
        &self,
        url: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Value, RestError> {
        let query = query.unwrap_or_default();
        self.calls.lock().unwrap().push(GetCall {
            url: url.to_string(),
            query: query.clone(),
        });

        if let Some(record) = self.records.get(url) {
            return Ok(record.clone());
        }

        let Some(all) = self.collections.get(url) else {
            return Err(not_found());
        };

        let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let limit: usize = query
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(50);
        let start = page.saturating_sub(1) * limit;
        if start >= all.len() {
            return Err(RestError::EmptyResponse {
                path: url.to_string(),
            });
        }
        let end = (start + limit).min(all.len());
        Ok(Value::Array(all[start..end].to_vec()))
    }

    async fn update(&self, url: &str, updates: &Map<String, Value>) -> Result<Value, RestError> {
        self.updates
            .lock()
            .unwrap()
            .push((url.to_string(), updates.clone()));
        Ok(Value::Object(updates.clone()))
    }
}

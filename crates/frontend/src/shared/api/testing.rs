//! Transport doubles for host-side tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ApiError, ApiRequest, Method, RawResponse, Transport};

type Handler = Box<dyn Fn(&ApiRequest) -> Result<RawResponse, ApiError>>;

/// Answers every request with a closure and remembers what it was asked.
pub struct ScriptedTransport {
    handler: Handler,
    seen: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(handler: impl Fn(&ApiRequest) -> Result<RawResponse, ApiError> + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, _url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.seen.borrow_mut().push(request.clone());
        (self.handler)(request)
    }
}

/// Tiny REST backend keeping collections of JSON objects keyed by path.
///
/// `GET /coll` lists bare, `POST /coll` assigns the next id and answers with
/// an envelope, `PUT`/`DELETE /coll/{id}` update or remove.
#[derive(Default)]
pub struct InMemoryBackend {
    collections: RefCell<BTreeMap<String, Vec<Value>>>,
    calls: RefCell<Vec<String>>,
    offline: Cell<bool>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, collection: &str, rows: Vec<Value>) {
        self.collections
            .borrow_mut()
            .insert(collection.to_string(), rows);
    }

    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.collections
            .borrow()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// `"METHOD /path"` of every call received, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn split(path: &str) -> (String, Option<i64>) {
        match path.rsplit_once('/') {
            Some((coll, last)) if !coll.is_empty() => match last.parse::<i64>() {
                Ok(id) => (coll.to_string(), Some(id)),
                Err(_) => (path.to_string(), None),
            },
            _ => (path.to_string(), None),
        }
    }

    fn not_found() -> RawResponse {
        RawResponse::json(404, &json!({"success": false, "error": "Not found"}))
    }

    fn handle(&self, request: &ApiRequest) -> RawResponse {
        let (coll, id) = Self::split(&request.path);
        let mut collections = self.collections.borrow_mut();
        let rows = collections.entry(coll).or_default();
        let position = |rows: &Vec<Value>, id: i64| {
            rows.iter()
                .position(|r| r.get("id").and_then(Value::as_i64) == Some(id))
        };

        match (request.method, id) {
            (Method::Get, None) => RawResponse::json(200, &Value::Array(rows.clone())),
            (Method::Get, Some(id)) => match position(&*rows, id) {
                Some(i) => RawResponse::json(200, &json!({"success": true, "data": rows[i]})),
                None => Self::not_found(),
            },
            (Method::Post, None) => {
                let next_id = rows
                    .iter()
                    .filter_map(|r| r.get("id").and_then(Value::as_i64))
                    .max()
                    .unwrap_or(0)
                    + 1;
                let mut row = request.body.clone().unwrap_or_else(|| json!({}));
                if let Some(obj) = row.as_object_mut() {
                    obj.insert("id".to_string(), json!(next_id));
                }
                rows.push(row.clone());
                RawResponse::json(201, &json!({"success": true, "data": row}))
            }
            (Method::Put, Some(id)) => match position(&*rows, id) {
                Some(i) => {
                    if let (Some(target), Some(Value::Object(patch))) =
                        (rows[i].as_object_mut(), request.body.as_ref())
                    {
                        for (k, v) in patch {
                            target.insert(k.clone(), v.clone());
                        }
                    }
                    RawResponse::json(200, &json!({"success": true, "data": rows[i]}))
                }
                None => Self::not_found(),
            },
            (Method::Delete, Some(id)) => match position(&*rows, id) {
                Some(i) => {
                    rows.remove(i);
                    RawResponse::json(200, &json!({"success": true}))
                }
                None => Self::not_found(),
            },
            _ => RawResponse::json(405, &json!({"error": "Method not allowed"})),
        }
    }
}

#[async_trait(?Send)]
impl Transport for InMemoryBackend {
    async fn execute(&self, _url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", request.method, request.path));
        if self.offline.get() {
            return Err(ApiError::Network("offline".into()));
        }
        Ok(self.handle(request))
    }
}

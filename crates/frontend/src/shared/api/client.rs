use std::rc::Rc;

use contracts::domain::common::envelope::{error_message, ApiEnvelope, FALLBACK_ERROR};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiRequest, BearerAuth, BrowserTransport, RequestMiddleware, Transport};
use crate::shared::config::config;
use crate::system::auth::storage::BrowserStorage;

/// Gateway used by every screen: middleware, then transport, then
/// normalisation of the answer.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    middleware: Vec<Rc<dyn RequestMiddleware>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            middleware: Vec::new(),
        }
    }

    pub fn with_middleware(mut self, middleware: Rc<dyn RequestMiddleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run `request` and return the decoded JSON body.
    ///
    /// Non-2xx answers and `{"success": false}` envelopes become
    /// [`ApiError::Server`] carrying the server's `error`/`message` text.
    /// An empty 2xx body is `Value::Null`.
    pub async fn send(&self, mut request: ApiRequest) -> Result<Value, ApiError> {
        for step in &self.middleware {
            step.prepare(&mut request);
        }
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method, url);

        let raw = match self.transport.execute(&url, &request).await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("{} {} failed: {}", request.method, request.path, e);
                return Err(e);
            }
        };

        let body = if raw.body.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&raw.body) {
                Ok(v) => v,
                Err(_) if !raw.ok() => Value::Null,
                Err(e) => return Err(ApiError::Decode(e.to_string())),
            }
        };

        if !raw.ok() {
            let message = error_message(&body).unwrap_or_else(|| FALLBACK_ERROR.to_string());
            log::warn!(
                "{} {} -> {}: {}",
                request.method,
                request.path,
                raw.status,
                message
            );
            return Err(ApiError::Server {
                status: raw.status,
                message,
            });
        }
        if let Some(message) = ApiEnvelope::failure_message(&body) {
            log::warn!("{} {} rejected: {}", request.method, request.path, message);
            return Err(ApiError::Server {
                status: raw.status,
                message,
            });
        }
        Ok(body)
    }

    /// Decode the whole body as `R`.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode the envelope's `data`, or the bare body when not enveloped.
    pub async fn fetch_data<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_value(ApiEnvelope::unwrap_value(body))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Run a mutating call whose answer is not needed.
    pub async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

/// Browser client: configured base URL, bearer token from `localStorage`.
pub fn client() -> ApiClient {
    ApiClient::new(config().api.base_url.clone(), Rc::new(BrowserTransport))
        .with_middleware(Rc::new(BearerAuth::new(Rc::new(BrowserStorage))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{InMemoryBackend, ScriptedTransport};
    use crate::shared::api::RawResponse;
    use crate::system::auth::storage::MemoryStore;
    use contracts::domain::a001_equipment::{Equipment, EquipmentDto};
    use futures::executor::block_on;
    use serde_json::json;

    const BASE: &str = "http://localhost:5000/api";

    fn scripted(status: u16, body: &str) -> ApiClient {
        let body = body.to_string();
        ApiClient::new(
            BASE,
            Rc::new(ScriptedTransport::new(move |_| {
                Ok(RawResponse::new(status, body.clone()))
            })),
        )
    }

    #[test]
    fn test_server_error_message() {
        let err = block_on(scripted(404, r#"{"error": "Team not found"}"#).send(ApiRequest::get("/teams/9")))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "Team not found".into()
            }
        );
    }

    #[test]
    fn test_server_error_fallback() {
        let err = block_on(scripted(500, "<html>oops</html>").send(ApiRequest::get("/teams")))
            .unwrap_err();
        assert_eq!(err.user_message(), "API request failed");
    }

    #[test]
    fn test_envelope_failure_on_200() {
        let err = block_on(
            scripted(200, r#"{"success": false, "message": "Duplicate email"}"#)
                .send(ApiRequest::post("/technicians")),
        )
        .unwrap_err();
        assert_eq!(err.user_message(), "Duplicate email");
    }

    #[test]
    fn test_network_error() {
        let client = ApiClient::new(
            BASE,
            Rc::new(ScriptedTransport::new(|_| {
                Err(ApiError::Network("Failed to fetch".into()))
            })),
        );
        let err = block_on(client.send(ApiRequest::get("/equipment"))).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Unable to connect to server. Please try again."
        );
    }

    #[test]
    fn test_fetch_data_bare_and_enveloped() {
        let bare: Vec<i64> = block_on(scripted(200, "[1,2,3]").fetch_data(ApiRequest::get("/x"))).unwrap();
        assert_eq!(bare, vec![1, 2, 3]);
        let wrapped: Vec<i64> =
            block_on(scripted(200, r#"{"success":true,"data":[4]}"#).fetch_data(ApiRequest::get("/x")))
                .unwrap();
        assert_eq!(wrapped, vec![4]);
    }

    #[test]
    fn test_undecodable_success_body() {
        let err = block_on(scripted(200, "not json").send(ApiRequest::get("/x"))).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_middleware_runs_before_transport() {
        let transport = Rc::new(ScriptedTransport::new(|_| Ok(RawResponse::new(200, "[]"))));
        let client = ApiClient::new(BASE, transport.clone())
            .with_middleware(Rc::new(BearerAuth::new(Rc::new(MemoryStore::with_token("abc")))));
        block_on(client.send(ApiRequest::get("/equipment"))).unwrap();
        let seen = transport.requests();
        assert_eq!(seen.len(), 1);
        assert!(seen[0]
            .headers
            .contains(&("Authorization".to_string(), "Bearer abc".to_string())));
    }

    #[test]
    fn test_create_then_list_round_trip() {
        let backend = Rc::new(InMemoryBackend::new());
        backend.seed(
            "/equipment",
            vec![json!({"id": 1, "name": "Generator A", "type": "Power", "department": "Plant", "status": "operational"})],
        );
        let client = ApiClient::new(BASE, backend.clone());

        let dto = EquipmentDto {
            name: "Server Rack".into(),
            equipment_type: "Network".into(),
            department: "IT".into(),
            ..Default::default()
        };
        block_on(client.execute(ApiRequest::post("/equipment").json(&dto).unwrap())).unwrap();

        let listed: Vec<Equipment> = block_on(client.fetch_data(ApiRequest::get("/equipment"))).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(
            listed.iter().filter(|e| e.name == "Server Rack").count(),
            1
        );
        assert_eq!(backend.calls(), vec!["POST /equipment", "GET /equipment"]);
    }
}

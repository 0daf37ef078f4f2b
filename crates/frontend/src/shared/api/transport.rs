use async_trait::async_trait;
use gloo_net::http::Request;

use super::{ApiError, ApiRequest, Method};

/// Status and body of an HTTP answer, before any interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves an [`ApiRequest`] over the wire.
///
/// Only transport failures are errors here; any HTTP status is a response.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn execute(&self, url: &str, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

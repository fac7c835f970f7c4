//! Transport trait — the abstraction over the HTTP layer.
//!
//! A `Transport` takes a fully described [`ApiRequest`] and returns the raw
//! response body on success. Resource managers talk to the network only
//! through this trait, so tests substitute recording transports and callers
//! can layer decorators (retry, metrics) without touching manager logic.
//!
//! Implementations: reqwest-backed HTTP, retry decorator, test mocks.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RestError;

/// HTTP verb for an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully described request against the API, relative to the versioned root.
///
/// `audit` carries the audit-log annotation for mutating operations. The
/// remote's audit-log convention requires the header to be present (with an
/// empty value) even when no reason was supplied, so `Some("")` and `None`
/// mean different things: `Some` sends the header, `None` omits it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below `/api/v<version>`, e.g. `/channels/123/messages`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub audit: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            audit: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach URL query parameters.
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body serialized from `value`.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, RestError> {
        let body = serde_json::to_value(value)
            .map_err(|e| RestError::Decode(format!("Failed to serialize request body: {e}")))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Mark the request as audited. The audit header is always sent for
    /// audited requests; a missing reason becomes the empty string.
    pub fn audit(mut self, reason: Option<&str>) -> Self {
        self.audit = Some(reason.unwrap_or_default().to_string());
        self
    }
}

/// A successful response from the transport. Non-2xx statuses never reach
/// here; they surface as [`RestError::Api`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        serde_json::from_str(&self.body).map_err(|e| RestError::Decode(e.to_string()))
    }
}

/// The core transport trait.
///
/// Every network backend implements this. Resource managers call `send()`
/// without knowing which transport is in play — pure polymorphism.
#[async_trait]
pub trait Transport: Send + Sync {
    /// A human-readable name for this transport (e.g., "http", "retry").
    fn name(&self) -> &str;

    /// Issue the request and return the raw successful response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_method_and_path() {
        let req = ApiRequest::get("/channels/123");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/channels/123");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
        assert!(req.audit.is_none());
    }

    #[test]
    fn audit_defaults_to_empty_string() {
        let with_reason = ApiRequest::delete("/channels/1").audit(Some("spam"));
        assert_eq!(with_reason.audit.as_deref(), Some("spam"));

        // No reason still produces the header, with an empty value.
        let without = ApiRequest::delete("/channels/1").audit(None);
        assert_eq!(without.audit.as_deref(), Some(""));
    }

    #[test]
    fn json_body_is_serialized() {
        let req = ApiRequest::post("/channels/1/messages")
            .json(&serde_json::json!({"content": "hi"}))
            .unwrap();
        assert_eq!(req.body.unwrap()["content"], "hi");
    }

    #[test]
    fn response_json_decodes() {
        let resp = ApiResponse {
            status: 200,
            body: r#"{"id":"42"}"#.into(),
        };
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["id"], "42");
    }

    #[test]
    fn response_json_decode_failure() {
        let resp = ApiResponse {
            status: 200,
            body: "not json".into(),
        };
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(RestError::Decode(_))));
    }
}

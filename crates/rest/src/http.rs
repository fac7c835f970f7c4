//! reqwest-backed transport.
//!
//! Builds the versioned URL, attaches the standing headers (authorization,
//! content type, client identification) and the audit-log annotation when the
//! request carries one, and maps any non-success status to `RestError::Api`
//! with the raw body attached. Nothing here interprets status codes.

use async_trait::async_trait;
use quill_core::auth::AuthCredential;
use quill_core::error::RestError;
use quill_core::transport::{ApiRequest, ApiResponse, Method, Transport};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://chat.example.com";
const DEFAULT_API_VERSION: u8 = 9;
const USER_AGENT: &str = "Quill (https://github.com/quill-rs/quill, 0.1.0)";
const AUDIT_REASON_HEADER: &str = "X-Audit-Log-Reason";

/// The production transport, backed by a shared `reqwest::Client`.
pub struct HttpTransport {
    base_url: String,
    version: u8,
    auth: AuthCredential,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default base URL and API version.
    pub fn new(auth: AuthCredential) -> Result<Self, RestError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| RestError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.into(),
            version: DEFAULT_API_VERSION,
            auth,
            client,
        })
    }

    /// Point the transport at a different host (e.g., a proxy or test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Target a specific API version.
    pub fn with_api_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// The full URL for a request path.
    fn build_url(&self, path: &str) -> String {
        format!("{}/api/v{}{}", self.base_url, self.version, path)
    }

    fn to_reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RestError> {
        let url = self.build_url(&request.path);

        debug!(method = request.method.as_str(), path = %request.path, "Sending API request");

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), &url)
            .header("Authorization", self.auth.header_value())
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT);

        if let Some(ref reason) = request.audit {
            builder = builder.header(AUDIT_REASON_HEADER, reason);
        }

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RestError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RestError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            warn!(status, path = %request.path, "API request rejected");
            return Err(RestError::Api {
                status,
                message: body,
            });
        }

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(AuthCredential::bot("test-token")).unwrap()
    }

    #[test]
    fn url_uses_default_host_and_version() {
        let t = transport();
        assert_eq!(
            t.build_url("/channels/123"),
            "https://chat.example.com/api/v9/channels/123"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let t = transport().with_base_url("https://proxy.local/");
        assert_eq!(
            t.build_url("/channels/123/messages"),
            "https://proxy.local/api/v9/channels/123/messages"
        );
    }

    #[test]
    fn api_version_is_configurable() {
        let t = transport().with_api_version(10);
        assert_eq!(t.build_url("/channels/1"), "https://chat.example.com/api/v10/channels/1");
    }
}

//! Client context — owns the cache store and the transport.
//!
//! Resource managers are handed shared handles to both, so every manager
//! created from one client sees the same cache and the same credential.

use std::sync::Arc;

use quill_core::auth::AuthCredential;
use quill_core::error::RestError;
use quill_core::transport::Transport;
use quill_rest::{HttpTransport, RetryPolicy, RetryTransport};

use crate::cache::CacheStore;
use crate::channels::ChannelManager;

/// The client context for the chat API.
pub struct Client {
    transport: Arc<dyn Transport>,
    cache: Arc<CacheStore>,
}

impl Client {
    /// Start building a client that talks HTTP with the given credential.
    pub fn builder(auth: AuthCredential) -> ClientBuilder {
        ClientBuilder {
            auth,
            base_url: None,
            api_version: None,
            retry: None,
        }
    }

    /// Build a client over an arbitrary transport. The entry point for
    /// tests and custom stacks.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            cache: Arc::new(CacheStore::new()),
        }
    }

    /// The manager for the channel resource kind.
    pub fn channels(&self) -> ChannelManager {
        ChannelManager::new(self.transport.clone(), self.cache.clone())
    }

    /// Direct access to the cache store.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    auth: AuthCredential,
    base_url: Option<String>,
    api_version: Option<u8>,
    retry: Option<RetryPolicy>,
}

impl ClientBuilder {
    /// Point the client at a different host (proxy, test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Target a specific API version.
    pub fn api_version(mut self, version: u8) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Retry transient failures (network errors, 429, 5xx) at the transport
    /// boundary. Without this the client makes exactly one attempt per
    /// operation and every failure is the caller's to handle.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn build(self) -> Result<Client, RestError> {
        let mut http = HttpTransport::new(self.auth)?;
        if let Some(base_url) = self.base_url {
            http = http.with_base_url(base_url);
        }
        if let Some(version) = self.api_version {
            http = http.with_api_version(version);
        }

        let transport: Arc<dyn Transport> = match self.retry {
            Some(policy) => Arc::new(RetryTransport::new(http, policy)),
            None => Arc::new(http),
        };

        Ok(Client::with_transport(transport))
    }
}

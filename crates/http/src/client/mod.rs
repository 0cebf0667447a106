//! Folio HTTP client

pub mod about;
pub mod auth;
pub mod error;
pub mod projects;
pub mod settings;
pub mod store;
pub mod upload;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::rc::Rc;
use std::time::Duration;
use store::{MemorySessionStore, SessionStore};

const USER_AGENT: &str = concat!("folio-client/", env!("CARGO_PKG_VERSION"));

/// Portfolio API client
///
/// Every request built through [`ApiClient::request`] reads the session store
/// first and carries the stored credential as a bearer token when one is
/// present. The client never writes the store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    uploads_base_url: Option<String>,
    store: Rc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("uploads_base_url", &self.uploads_base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with an in-memory session store
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session store consulted on every request
    pub fn store(&self) -> &Rc<dyn SessionStore> {
        &self.store
    }

    /// Create a request builder, attaching the stored credential if any
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.store.read() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send a request and return the raw successful response
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "backend returned an error status");
            Err(ClientError::from_status(status, message))
        }
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose response body is not needed
    pub async fn execute_unit(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    /// Turn an image URL returned by the backend into a displayable one
    ///
    /// Relative `/uploads/` paths are served by the uploads host, everything
    /// else is returned as is.
    pub fn resolve_upload_url(&self, url: &str) -> String {
        match &self.uploads_base_url {
            Some(base) if url.starts_with("/uploads/") => format!("{base}{url}"),
            _ => url.to_string(),
        }
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    uploads_base_url: Option<String>,
    store: Option<Rc<dyn SessionStore>>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the API base URL (e.g. `http://localhost:3000/api`)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the host serving relative upload paths
    pub fn uploads_base_url(mut self, url: impl Into<String>) -> Self {
        self.uploads_base_url = Some(url.into());
        self
    }

    /// Set the session store holding the bearer credential
    pub fn store(mut self, store: Rc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the request timeout (ignored on wasm)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        let uploads_base_url = self
            .uploads_base_url
            .map(|url| url.trim_end_matches('/').to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(USER_AGENT).build()?
        };

        let store = self
            .store
            .unwrap_or_else(|| Rc::new(MemorySessionStore::default()));

        Ok(ApiClient {
            client,
            base_url,
            uploads_base_url,
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_resolve_upload_url() {
        let client = ApiClient::builder()
            .base_url("http://localhost:3000/api")
            .uploads_base_url("http://localhost:3000/")
            .build()
            .unwrap();

        assert_eq!(
            client.resolve_upload_url("/uploads/cat.png"),
            "http://localhost:3000/uploads/cat.png"
        );
        assert_eq!(
            client.resolve_upload_url("https://cdn.example.com/cat.png"),
            "https://cdn.example.com/cat.png"
        );
    }

    #[test]
    fn test_resolve_upload_url_without_uploads_host() {
        let client = ApiClient::new("http://localhost:3000/api").unwrap();
        assert_eq!(client.resolve_upload_url("/uploads/cat.png"), "/uploads/cat.png");
    }
}

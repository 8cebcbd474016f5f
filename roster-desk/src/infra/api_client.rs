use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

/// Header the demo service reads its access key from.
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client bound to a single base endpoint.
///
/// Every helper fails on transport errors and on any non-2xx status. There
/// are no retries and the transport's own timeouts are left untouched.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

/// Trim whitespace and trailing slashes, and add a scheme when missing.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let normalized = if trimmed.starts_with("http://")
        || trimmed.starts_with("https://")
    {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };
    if normalized != raw {
        warn!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, normalized
        );
    }
    normalized
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        let client = Client::builder()
            .user_agent(concat!("roster-desk/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Join `path` onto the base URL. Absolute URLs pass through.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Send and reject anything outside 2xx
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .build_request(request)
            .send()
            .await
            .context("request could not be completed")?;

        let status = response.status();
        if status.is_success() {
            debug!("[ApiClient] {} {}", status, response.url());
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(anyhow!(
            "Request failed with status {}: {}",
            status,
            error_text
        ))
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .context("failed to decode response body")
    }

    /// GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        self.execute_request(self.client.get(&url).query(query))
            .await
    }

    /// POST request with a JSON body
    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.build_url(path);
        self.execute_request(self.client.post(&url).json(body))
            .await
    }

    /// PUT request with a JSON body
    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let url = self.build_url(path);
        self.execute_request(self.client.put(&url).json(body))
            .await
    }

    /// DELETE request; any 2xx counts as success and the body is ignored
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use super::{ProviderError, ProviderResult};

/// Trait implemented by every catalog provider
#[async_trait]
pub trait AbstractProvider: Send + Sync {
    /// Get the class ID for the provider
    fn get_class_id(&self) -> &str;

    /// Build HTTP headers for authentication
    fn build_http_header(&self) -> HashMap<String, String>;

    /// Download JSON from a URL with optional query parameters
    async fn download(
        &self,
        url: &str,
        params: Option<HashMap<String, String>>,
    ) -> ProviderResult<Value>;
}

/// Shared HTTP plumbing for providers
pub struct BaseProvider {
    pub class_id: String,
    pub client: Client,
    pub headers: HashMap<String, String>,
}

impl BaseProvider {
    /// Create a new base provider
    pub fn new(
        class_id: String,
        headers: HashMap<String, String>,
        timeout: Duration,
    ) -> ProviderResult<Self> {
        let mut default_headers = HeaderMap::new();
        for (key, value) in &headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| ProviderError::ConfigurationError(format!("Bad header {}: {}", key, e)))?;
            let val = HeaderValue::from_str(value)
                .map_err(|e| ProviderError::ConfigurationError(format!("Bad value for {}: {}", key, e)))?;
            default_headers.insert(name, val);
        }

        let client = Client::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::ConfigurationError(format!("HTTP client: {}", e)))?;

        Ok(Self {
            class_id,
            client,
            headers,
        })
    }

    /// Make an HTTP GET request
    pub async fn get_request(
        &self,
        url: &str,
        params: Option<HashMap<String, String>>,
    ) -> ProviderResult<Response> {
        let mut request = self.client.get(url);

        if let Some(p) = params {
            request = request.query(&p);
        }

        let response = request.send().await.map_err(|e| {
            ProviderError::NetworkError(format!("Request failed: {}", e))
        })?;
        self.log_download(&response);
        Ok(response)
    }

    /// Download JSON content
    pub async fn download_json(
        &self,
        url: &str,
        params: Option<HashMap<String, String>>,
    ) -> ProviderResult<Value> {
        let response = self.get_request(url, params).await?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpError {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("JSON parse error: {}", e))
        })
    }

    /// Log download information
    pub fn log_download(&self, response: &Response) {
        info!("{}: downloaded {} ({})", self.class_id, response.url(), response.status());
        debug!("{}: response headers {:?}", self.class_id, response.headers());
    }
}

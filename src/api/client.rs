//! HamGO REST API Client
//!
//! HTTP client for the node's `/cache` and `/spread/cq` routes.

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::error::{ApiError, ApiResult};
use super::MessageApi;
use crate::config::ApiConfig;
use crate::model::Message;

/// HamGO node REST API client
pub struct ApiClient {
    client: Client,
    endpoint: String,
    limit: Option<usize>,
}

/// Turn a configured endpoint into an absolute base URL
///
/// `//host/api` is resolved against `http:`, `/api` against `origin`.
/// The result has no trailing slash.
pub fn resolve_endpoint(endpoint: &str, origin: &str) -> ApiResult<String> {
    let absolute = if endpoint.starts_with("//") {
        format!("http:{}", endpoint)
    } else if endpoint.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), endpoint)
    } else {
        endpoint.to_string()
    };

    let url = Url::parse(&absolute).map_err(|e| ApiError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: "expected an http(s) URL".to_string(),
        });
    }

    Ok(absolute.trim_end_matches('/').to_string())
}

impl ApiClient {
    /// Create a client for the endpoint described by the configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let endpoint = resolve_endpoint(&config.endpoint(), &config.origin)?;
        Self::with_endpoint(&endpoint)
    }

    /// Create a client for an absolute endpoint
    pub fn with_endpoint(endpoint: &str) -> ApiResult<Self> {
        let endpoint = resolve_endpoint(endpoint, "")?;
        let client = Client::builder().build().map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            endpoint,
            limit: None,
        })
    }

    /// Limit the number of messages requested through [`MessageApi`]
    pub fn with_limit(mut self, max: Option<usize>) -> Self {
        self.limit = max;
        self
    }

    /// Base URL all requests are made against
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the node's message cache
    pub async fn fetch_messages(&self) -> ApiResult<Vec<Message>> {
        self.get_cache(None).await
    }

    /// Fetch at most `max` cached messages
    ///
    /// The limit is applied by the node; the result is passed through untouched.
    pub async fn fetch_recent(&self, max: usize) -> ApiResult<Vec<Message>> {
        self.get_cache(Some(max)).await
    }

    /// Spread a CQ message through the node
    pub async fn submit_message(&self, msg: &Message) -> ApiResult<()> {
        let url = format!("{}/spread/cq", self.endpoint);

        tracing::debug!(sequence = msg.sequence, callsign = %msg.contact.callsign, "spreading CQ message");

        let response = self
            .client
            .post(&url)
            .json(msg)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::status(status.as_u16(), text))
        }
    }

    async fn get_cache(&self, max: Option<usize>) -> ApiResult<Vec<Message>> {
        let url = format!("{}/cache", self.endpoint);

        let mut request = self.client.get(&url);
        if let Some(max) = max {
            request = request.query(&[("max", max)]);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), text));
        }

        let body = response.bytes().await.map_err(ApiError::from_transport)?;
        let messages: Vec<Message> = serde_json::from_slice(&body)?;

        tracing::trace!(count = messages.len(), "fetched message cache");
        Ok(messages)
    }
}

#[async_trait]
impl MessageApi for ApiClient {
    async fn fetch_messages(&self) -> ApiResult<Vec<Message>> {
        match self.limit {
            Some(max) => ApiClient::fetch_recent(self, max).await,
            None => ApiClient::fetch_messages(self).await,
        }
    }

    async fn submit_message(&self, msg: &Message) -> ApiResult<()> {
        ApiClient::submit_message(self, msg).await
    }
}

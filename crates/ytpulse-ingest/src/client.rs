//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with API key handling, URL construction and typed response
//! decoding. Every non-2xx status, transport failure, or undecodable body is
//! surfaced as [`IngestError::Upstream`] carrying the raw payload. The client
//! does not retry.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use ytpulse_core::config::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};

use crate::error::IngestError;
use crate::types::ListResponse;

/// Items requested per page. The API's maximum for both list endpoints.
pub const PAGE_SIZE: u32 = 100;

/// Client for the YouTube Data API.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, IngestError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT)
    }

    /// Creates a new client with a custom base URL and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`IngestError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends endpoint names
        // instead of replacing the last path segment (`/youtube/v3`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| IngestError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of a `*.list` endpoint.
    ///
    /// `id_param` names the query parameter that selects the collection
    /// (`videoId`, `liveChatId`). `page_token` is sent as `pageToken` when
    /// present. `maxResults` is always [`PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Upstream`] on any non-2xx status, transport
    /// failure, timeout, or a body that does not decode as `ListResponse<T>`.
    pub async fn fetch_list_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id_param: &str,
        collection_id: &str,
        page_token: Option<&str>,
    ) -> Result<ListResponse<T>, IngestError> {
        let max_results = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet"),
            (id_param, collection_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url(endpoint, &params)?;
        let context = format!("{endpoint}({id_param}={collection_id})");
        self.request_json(&url, &context).await
    }

    /// Builds `{base}/{endpoint}?{extra..}&key={api_key}` with every value
    /// percent-encoded.
    pub(crate) fn build_url(
        &self,
        endpoint: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, IngestError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| IngestError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot append endpoint \"{endpoint}\": {e}"),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and decodes a 2xx body as `T`.
    ///
    /// `context` names the call in errors and logs; the URL itself is never
    /// logged because it carries the API key.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Upstream`] on transport failure, non-2xx status,
    /// or an undecodable body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, IngestError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| IngestError::transport(context, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| IngestError::transport(context, e))?;

        if !status.is_success() {
            tracing::debug!(
                context,
                status = status.as_u16(),
                "upstream returned non-success status"
            );
            return Err(IngestError::Upstream {
                context: context.to_owned(),
                status: Some(status.as_u16()),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| IngestError::Upstream {
            context: format!("{context}: undecodable response ({e})"),
            status: Some(status.as_u16()),
            body,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

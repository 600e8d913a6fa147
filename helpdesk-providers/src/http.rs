//! HTTP client abstraction and utilities

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error;
use helpdesk_core::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::trace;

/// HTTP client abstraction
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a JSON body and decode the JSON reply
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error>;
}

/// Default HTTP client implementation using reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new HTTP client with the default timeout
    pub fn new() -> Result<Self, Error> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(error::network_error)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn post(&self, url: &str, headers: HeaderMap, body: Value) -> Result<Value, Error> {
        trace!(url, "POST");
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(error::network_error)?;

        let status = response.status();
        if !status.is_success() {
            let provider = response
                .url()
                .host_str()
                .unwrap_or("unknown")
                .to_string();
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(&provider, status, text));
        }

        response.json().await.map_err(error::network_error)
    }
}

/// Map a non-success HTTP status to a core error
///
/// 401 and 403 mean the key is wrong and 408 and 504 are timeouts. Any other
/// status is reported with its code so callers can tell them apart.
pub fn status_error(provider: &str, status: StatusCode, body: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Authentication(format!("HTTP {}: {}", status, body))
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Error::Timeout,
        _ => error::provider_error(provider, Some(status.as_u16()), body),
    }
}

/// Helper to create common headers
pub fn create_headers(api_key: &str, additional: Option<HeaderMap>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| Error::Configuration(format!("Invalid API key: {}", e)))?,
    );

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(additional) = additional {
        headers.extend(additional);
    }

    Ok(headers)
}

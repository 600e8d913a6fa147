//! OpenAI provider implementation
//!
//! Sends chat completions to OpenAI (or any compatible endpoint) and maps
//! [`ResponseFormat`](helpdesk_core::ResponseFormat) onto the API's
//! `response_format` field so that structured output is enforced upstream.

use crate::http::{create_headers, HttpClient, ReqwestClient};
use crate::openai::{config::OpenAIConfig, converter::OpenAIConverter, parser::OpenAIParser};
use crate::traits::{RequestConverter, ResponseParser};
use async_trait::async_trait;
use helpdesk_core::{Error, Provider, Request, Response};
use reqwest::header::{HeaderMap, HeaderValue};
use std::sync::Arc;
use tracing::debug;

/// OpenAI provider for chat completions
///
/// # Example
///
/// ```no_run
/// use helpdesk_providers::OpenAI;
///
/// let provider = OpenAI::with_api_key("your-api-key").expect("client");
///
/// // Or with custom configuration and client
/// use helpdesk_providers::openai::OpenAIConfig;
/// use helpdesk_providers::http::ReqwestClient;
/// use std::sync::Arc;
///
/// let config = OpenAIConfig::new("your-api-key").with_organization("org-id");
/// let client = Arc::new(ReqwestClient::new().expect("Failed to create client"));
/// let provider = OpenAI::new(config, client);
/// ```
#[derive(Clone)]
pub struct OpenAI {
    client: Arc<dyn HttpClient>,
    config: OpenAIConfig,
    converter: OpenAIConverter,
    parser: OpenAIParser,
}

impl OpenAI {
    /// Create a new OpenAI provider with the given configuration and client
    pub fn new(config: OpenAIConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            config,
            converter: OpenAIConverter,
            parser: OpenAIParser,
        }
    }

    /// Create a new OpenAI provider with just an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::from_config(OpenAIConfig::new(api_key))
    }

    /// Create a provider from `OPENAI_API_KEY` / `OPENAI_BASE_URL`
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(OpenAIConfig::from_env()?)
    }

    fn from_config(config: OpenAIConfig) -> Result<Self, Error> {
        let client = Arc::new(ReqwestClient::new()?);
        Ok(Self::new(config, client))
    }

    /// The active configuration
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn headers(&self) -> Result<HeaderMap, Error> {
        let additional = match &self.config.organization_id {
            Some(org) => {
                let mut extra = HeaderMap::new();
                extra.insert(
                    "OpenAI-Organization",
                    HeaderValue::from_str(org).map_err(|e| {
                        Error::Configuration(format!("Invalid organization id: {}", e))
                    })?,
                );
                Some(extra)
            }
            None => None,
        };
        create_headers(&self.config.api_key, additional)
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn request(&self, request: Request) -> Result<Response, Error> {
        let body = self.converter.convert_request(&request)?;
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            structured = request.is_structured(),
            "Sending OpenAI chat completion"
        );

        let reply = self
            .client
            .post(&self.config.chat_url(), self.headers()?, body)
            .await?;

        self.parser.parse_response(reply)
    }
}

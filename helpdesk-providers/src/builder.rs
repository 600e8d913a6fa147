//! Builder pattern for provider construction
//!
//! # Examples
//!
//! ```no_run
//! use helpdesk_providers::builder::{OpenAIBuilder, ProviderBuilder};
//!
//! let provider = OpenAIBuilder::new("api-key")
//!     .base_url("https://custom.openai.azure.com")
//!     .organization("org-123")
//!     .build()
//!     .expect("Failed to build provider");
//! ```

use crate::http::{HttpClient, ReqwestClient};
use crate::openai::{OpenAI, OpenAIConfig};
use helpdesk_core::Error;
use std::sync::Arc;
use std::time::Duration;

/// Common builder trait for all providers
pub trait ProviderBuilder: Sized {
    /// The provider type being built
    type Provider;

    /// Set a custom HTTP client
    ///
    /// Useful for testing or special networking requirements.
    fn with_client(self, client: Arc<dyn HttpClient>) -> Self;

    /// Build the provider
    fn build(self) -> Result<Self::Provider, Error>;
}

/// Builder for constructing OpenAI providers
pub struct OpenAIBuilder {
    api_key: String,
    base_url: Option<String>,
    organization: Option<String>,
    timeout: Option<Duration>,
    client: Option<Arc<dyn HttpClient>>,
}

impl OpenAIBuilder {
    /// Create a new OpenAI builder with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            organization: None,
            timeout: None,
            client: None,
        }
    }

    /// Start from `OPENAI_API_KEY` / `OPENAI_BASE_URL`
    pub fn from_env() -> Result<Self, Error> {
        let config = OpenAIConfig::from_env()?;
        Ok(Self::new(config.api_key).base_url(config.base_url))
    }

    /// Set the base URL (for custom deployments)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the organization ID
    pub fn organization(mut self, org: impl Into<String>) -> Self {
        self.organization = Some(org.into());
        self
    }

    /// Set the HTTP timeout used when no custom client is supplied
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ProviderBuilder for OpenAIBuilder {
    type Provider = OpenAI;

    fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    fn build(self) -> Result<OpenAI, Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("OpenAI API key is empty".to_string()));
        }

        let mut config = OpenAIConfig::new(self.api_key);
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(org) = self.organization {
            config = config.with_organization(org);
        }

        let client: Arc<dyn HttpClient> = match (self.client, self.timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => Arc::new(ReqwestClient::with_timeout(timeout)?),
            (None, None) => Arc::new(ReqwestClient::new()?),
        };

        Ok(OpenAI::new(config, client))
    }
}

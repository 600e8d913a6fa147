//! OpenAI provider configuration

use crate::constants::{OPENAI_API_KEY_ENV, OPENAI_BASE_URL_ENV, OPENAI_DEFAULT_BASE_URL};
use helpdesk_core::Error;

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Optional organization ID
    pub organization_id: Option<String>,
}

impl OpenAIConfig {
    /// Create a new configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
            organization_id: None,
        }
    }

    /// Read `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL` (optional)
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(OPENAI_API_KEY_ENV)
            .map_err(|_| Error::Configuration(format!("{} is not set", OPENAI_API_KEY_ENV)))?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(OPENAI_BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the organization ID
    pub fn with_organization(mut self, org: impl Into<String>) -> Self {
        self.organization_id = Some(org.into());
        self
    }

    /// Get the URL for chat completions
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

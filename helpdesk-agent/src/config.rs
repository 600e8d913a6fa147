//! Dispatcher configuration

use crate::prompt::DEFAULT_SYSTEM_PROMPT;
use helpdesk_core::{Model, Parameters};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the model
pub const MODEL_ENV: &str = "HELPDESK_MODEL";
/// Environment variable setting the sampling temperature
pub const TEMPERATURE_ENV: &str = "HELPDESK_TEMPERATURE";
/// Environment variable capping generated tokens
pub const MAX_TOKENS_ENV: &str = "HELPDESK_MAX_TOKENS";

/// Errors from building a [`DispatcherConfig`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting had an unusable value
    #[error("invalid {name} {value:?}: {reason}")]
    Invalid {
        /// Setting or variable name
        name: String,
        /// Offending value
        value: String,
        /// What was wrong with it
        reason: String,
    },
}

/// How the dispatcher talks to the model
#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// Model to request
    pub model: Model,
    /// Sampling temperature, provider default when unset
    pub temperature: Option<f32>,
    /// Cap on generated tokens, provider default when unset
    pub max_tokens: Option<u32>,
    /// System prompt sent ahead of every query
    pub system_prompt: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: None,
            max_tokens: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl DispatcherConfig {
    /// Defaults overridden by `HELPDESK_MODEL`, `HELPDESK_TEMPERATURE` and
    /// `HELPDESK_MAX_TOKENS` where set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(model) = lookup(MODEL_ENV) {
            if model.trim().is_empty() {
                return Err(invalid(MODEL_ENV, &model, "must not be empty"));
            }
            config.model = Model::new(model);
        }
        if let Some(raw) = lookup(TEMPERATURE_ENV) {
            config = config.with_temperature(parse(TEMPERATURE_ENV, &raw)?)?;
        }
        if let Some(raw) = lookup(MAX_TOKENS_ENV) {
            config.max_tokens = Some(parse(MAX_TOKENS_ENV, &raw)?);
        }

        Ok(config)
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the temperature; must be within `[0.0, 2.0]`
    pub fn with_temperature(mut self, temperature: f32) -> Result<Self, ConfigError> {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(invalid(
                "temperature",
                &temperature.to_string(),
                "must be between 0.0 and 2.0",
            ));
        }
        self.temperature = Some(temperature);
        Ok(self)
    }

    /// Set the token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Replace the system prompt
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Generation parameters for outgoing requests
    pub fn parameters(&self) -> Parameters {
        Parameters {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

fn parse<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(name, raw, &e.to_string()))
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

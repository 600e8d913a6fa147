//! Constants for provider implementations

/// Default OpenAI base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the OpenAI base URL
pub const OPENAI_BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

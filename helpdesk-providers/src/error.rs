//! Provider-specific error helpers

use helpdesk_core::Error as CoreError;

/// Failure reported by a provider, with the HTTP status when there was one
pub fn provider_error(
    provider: impl Into<String>,
    status: Option<u16>,
    message: impl Into<String>,
) -> CoreError {
    CoreError::Provider {
        provider: provider.into(),
        status,
        message: message.into(),
    }
}

/// Convert network errors to core errors
pub fn network_error(error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        return CoreError::Timeout;
    }
    CoreError::Network {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

/// Convert serialization errors to core errors
pub fn serialization_error(error: serde_json::Error) -> CoreError {
    CoreError::Serialization {
        message: error.to_string(),
        source: Some(Box::new(error)),
    }
}

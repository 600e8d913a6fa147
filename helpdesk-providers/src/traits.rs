//! Common traits for provider implementations

use helpdesk_core::{Error, Request, Response};
use serde_json::Value;

/// Convert requests to provider-specific format
pub trait RequestConverter: Send + Sync {
    /// Convert a generic request to provider-specific JSON
    fn convert_request(&self, request: &Request) -> Result<Value, Error>;
}

/// Parse responses from provider-specific format
pub trait ResponseParser: Send + Sync {
    /// Parse provider-specific JSON into a generic response
    fn parse_response(&self, value: Value) -> Result<Response, Error>;
}

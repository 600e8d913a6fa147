//! Core provider trait for LLM interactions

use crate::error::Result;
use crate::types::request::Request;
use crate::types::response::Response;
use async_trait::async_trait;

/// The external model-call collaborator
///
/// A provider takes a [`Request`] (messages, optional output schema and an
/// opaque context map) and returns the model's [`Response`] or a failure.
/// Providers own everything about the call itself: transport, credentials,
/// model selection and rate limiting.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send a request and get a complete response
    async fn request(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<P: Provider + ?Sized> Provider for std::sync::Arc<P> {
    async fn request(&self, request: Request) -> Result<Response> {
        (**self).request(request).await
    }
}

//! High-level client API for LLM interactions
//!
//! This module provides a simplified interface over a [`Provider`], with a
//! fluent builder API and helpers for structured output.
//!
//! [`Provider`]: helpdesk_core::Provider

mod builder;
mod client;

pub use builder::RequestBuilder;
pub use client::{Client, ConnectedRequestBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{Client, RequestBuilder};
    pub use helpdesk_core::{Content, Message, Role};
}

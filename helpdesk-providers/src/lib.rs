//! Provider implementations for the Helpdesk support dispatcher

#![warn(missing_docs)]

pub mod builder;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;

// Provider implementations
pub mod openai;

// Re-export provider types
pub use openai::OpenAI;

// Re-export common traits
pub use traits::{RequestConverter, ResponseParser};

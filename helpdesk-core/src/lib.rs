//! Core traits and types for the Helpdesk support dispatcher
//!
//! This crate provides the abstractions shared by every other Helpdesk crate:
//! the [`Provider`] seam through which a language model is called, the
//! request/response types that cross it, and the field-level
//! [`ValidationError`] used by every schema in the workspace.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod provider;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use error::{BoxError, Error, Result};
pub use provider::Provider;
pub use types::{
    message::{Content, Message, Metadata, Role},
    request::{Model, Parameters, Request, RequestBuilder},
    response::{FinishReason, Response, ResponseMetadata, Usage},
    structured::{ResponseFormat, StructuredOutput},
};
pub use validation::{FieldViolation, ValidationError, Violations};

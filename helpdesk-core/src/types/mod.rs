//! Core types used throughout the Helpdesk library

pub mod message;
pub mod request;
pub mod response;
pub mod structured;

/// Opaque caller context forwarded to a provider untouched
pub type Context = std::collections::BTreeMap<String, String>;

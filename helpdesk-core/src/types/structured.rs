//! Types for structured output functionality

use crate::error::Error;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Trait for types that can be used as structured output from LLMs.
///
/// Implementing this trait allows a type to be requested as the output
/// contract of a call (see [`ResponseFormat::for_type`]) and to be checked
/// on the way back in. Serde only guarantees shape; [`validate`] carries the
/// value-level constraints (ranges, non-empty strings, ...).
///
/// [`validate`]: StructuredOutput::validate
pub trait StructuredOutput: Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Returns the JSON Schema for this type.
    fn schema() -> Value;

    /// Name the schema is registered under with the provider.
    fn schema_name() -> String {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_string()
    }

    /// Check value-level constraints on an already-typed value.
    ///
    /// Must not mutate `self` and must give the same answer every time.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Build a validated value from model output.
    fn from_json(value: Value) -> Result<Self, Error> {
        let parsed: Self = serde_json::from_value(value)?;
        parsed.validate()?;
        Ok(parsed)
    }
}

/// Format specification for structured responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ResponseFormat {
    /// Request a response matching a specific JSON Schema.
    JsonSchema {
        /// Name of the schema
        name: String,
        /// The JSON Schema that the response must conform to.
        schema: Value,
        /// Whether to enforce strict schema validation (provider-specific).
        strict: bool,
    },
    /// Request any valid JSON object response.
    #[default]
    JsonObject,
}

impl ResponseFormat {
    /// Strict JSON Schema format for a structured output type
    pub fn for_type<T: StructuredOutput>() -> Self {
        ResponseFormat::JsonSchema {
            name: T::schema_name(),
            schema: T::schema(),
            strict: true,
        }
    }
}

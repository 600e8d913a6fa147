//! Response types for LLM interactions

use crate::error::{Error, Result};
use serde_json::Value;

/// Metadata about a response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetadata {
    /// Model used for generation
    pub model: Option<String>,
    /// Unique ID for this response
    pub id: Option<String>,
    /// Usage statistics
    pub usage: Option<Usage>,
    /// Why generation ended
    pub finish_reason: Option<FinishReason>,
}

/// Token usage statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of message
    Stop,
    /// Hit max_tokens limit
    Length,
    /// Content was filtered
    ContentFilter,
}

/// A complete response from an LLM
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The generated content
    pub content: String,
    /// Response metadata
    pub metadata: ResponseMetadata,
}

impl Response {
    /// Create a simple text response
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: ResponseMetadata::default(),
        }
    }

    /// Create a response whose content is the given JSON value
    pub fn json(value: &Value) -> Self {
        Self::text(value.to_string())
    }

    /// Parse the content as JSON
    ///
    /// A single surrounding Markdown code fence is tolerated.
    pub fn parse_json(&self) -> Result<Value> {
        Ok(serde_json::from_str(strip_code_fence(&self.content))?)
    }

    /// Fail with a response error if generation was cut short
    pub fn ensure_complete(&self) -> Result<()> {
        match self.metadata.finish_reason {
            Some(FinishReason::Length) => Err(Error::ResponseError {
                message: "output truncated at max_tokens".to_string(),
            }),
            Some(FinishReason::ContentFilter) => Err(Error::ResponseError {
                message: "output blocked by content filter".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

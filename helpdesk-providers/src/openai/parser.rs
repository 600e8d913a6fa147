//! Response parsing for OpenAI

use crate::error;
use crate::traits::ResponseParser;
use helpdesk_core::{Error, FinishReason, Response, ResponseMetadata, Usage};
use serde::Deserialize;
use serde_json::Value;

/// Parses OpenAI chat-completion replies
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIParser;

impl ResponseParser for OpenAIParser {
    fn parse_response(&self, value: Value) -> Result<Response, Error> {
        let response: OpenAIResponse =
            serde_json::from_value(value).map_err(error::serialization_error)?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(error::provider_error("openai", None, "No choices in response"));
        };

        if let Some(refusal) = choice.message.refusal {
            return Err(Error::ResponseError {
                message: format!("model refused: {}", refusal),
            });
        }

        let metadata = ResponseMetadata {
            model: Some(response.model),
            id: Some(response.id),
            usage: response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason.as_deref().map(parse_finish_reason),
        };

        Ok(Response {
            content: choice.message.content.unwrap_or_default(),
            metadata,
        })
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// Response structures
#[derive(Deserialize)]
struct OpenAIResponse {
    id: String,
    model: String,
    choices: Vec<Choice>,
    usage: Option<UsageInfo>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageResponse,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct MessageResponse {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct UsageInfo {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

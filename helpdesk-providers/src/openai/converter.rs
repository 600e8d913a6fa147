//! Request conversion for OpenAI

use crate::traits::RequestConverter;
use helpdesk_core::{Content, Error, Message, Request, ResponseFormat, Role};
use serde_json::{json, Value};

/// Converts generic requests to OpenAI chat-completion bodies
///
/// The request's context map is caller bookkeeping and never goes on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAIConverter;

impl RequestConverter for OpenAIConverter {
    fn convert_request(&self, request: &Request) -> Result<Value, Error> {
        if request.messages.is_empty() {
            return Err(Error::Configuration(
                "OpenAI requests need at least one message".to_string(),
            ));
        }

        let mut body = json!({
            "model": request.model.to_string(),
            "messages": request.messages.iter().map(convert_message).collect::<Vec<_>>(),
            "stream": false,
        });

        // Add parameters
        if let Some(max_tokens) = request.parameters.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = request.parameters.temperature {
            body["temperature"] = json!(temperature);
        }

        if let Some(format) = &request.response_format {
            body["response_format"] = convert_response_format(format);
        }

        Ok(body)
    }
}

fn convert_message(message: &Message) -> Value {
    let role = match message.role {
        Role::System => "system",
        Role::Assistant => "assistant",
        _ => "user",
    };

    let content = match &message.content {
        Content::Text(text) => json!(text),
        Content::Multiple(parts) => json!(parts
            .iter()
            .map(|part| json!({ "type": "text", "text": part.flatten_text() }))
            .collect::<Vec<_>>()),
    };

    let mut msg = json!({
        "role": role,
        "content": content,
    });

    if let Some(name) = &message.metadata.name {
        msg["name"] = json!(name);
    }

    msg
}

fn convert_response_format(format: &ResponseFormat) -> Value {
    match format {
        ResponseFormat::JsonSchema {
            name,
            schema,
            strict,
        } => json!({
            "type": "json_schema",
            "json_schema": {
                "name": name,
                "schema": schema,
                "strict": strict,
            },
        }),
        ResponseFormat::JsonObject => json!({ "type": "json_object" }),
    }
}

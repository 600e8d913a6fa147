//! What gets sent to a provider

use crate::types::message::Message;
use crate::types::structured::{ResponseFormat, StructuredOutput};
use crate::types::Context;
use std::fmt;

/// Model name as the provider knows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model(pub String);

impl Model {
    /// Wrap a model name
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new("gpt-4o")
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Model {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sampling knobs; `None` leaves the provider default in place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    /// Cap on generated tokens
    pub max_tokens: Option<u32>,
    /// Sampling temperature, 0.0 to 2.0
    pub temperature: Option<f32>,
}

/// One model call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Prompt messages, in order
    pub messages: Vec<Message>,
    /// Model to call
    pub model: Model,
    /// Sampling knobs
    pub parameters: Parameters,
    /// Output contract, free text when absent
    pub response_format: Option<ResponseFormat>,
    /// Caller context, passed through to the provider without interpretation
    pub context: Context,
}

impl Request {
    /// Start building a request
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Request for the default model with no output contract
    pub fn new(messages: Vec<Message>) -> Self {
        Self::builder().messages(messages).build()
    }

    /// Whether an output format was asked for
    pub fn is_structured(&self) -> bool {
        self.response_format.is_some()
    }
}

/// Builder for [`Request`]
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    messages: Vec<Message>,
    model: Option<Model>,
    parameters: Parameters,
    response_format: Option<ResponseFormat>,
    context: Context,
}

impl RequestBuilder {
    /// Append a message
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Append several messages
    pub fn messages(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Replace all sampling knobs at once
    pub fn parameters(mut self, params: Parameters) -> Self {
        self.parameters = params;
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temp: f32) -> Self {
        self.parameters.temperature = Some(temp);
        self
    }

    /// Set the token cap
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.parameters.max_tokens = Some(tokens);
        self
    }

    /// Set the output contract
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    /// Ask for output matching `T`'s schema
    pub fn structured<T: StructuredOutput>(self) -> Self {
        self.response_format(ResponseFormat::for_type::<T>())
    }

    /// Add a context entry; a repeated key keeps the last value
    pub fn context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Add several context entries
    pub fn contexts<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.context
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Finish the request
    pub fn build(self) -> Request {
        Request {
            messages: self.messages,
            model: self.model.unwrap_or_default(),
            parameters: self.parameters,
            response_format: self.response_format,
            context: self.context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_model_names() {
        assert_eq!(Model::default().to_string(), "gpt-4o");

        let model: Model = "gpt-4o-mini".into();
        assert_eq!(model, Model::new(String::from("gpt-4o-mini")));
    }

    #[test]
    fn test_request_new_has_no_contract() {
        let request = Request::new(vec![Message::system("Be brief"), Message::user("Hello")]);

        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.model, Model::default());
        assert_eq!(request.parameters, Parameters::default());
        assert!(request.context.is_empty());
        assert!(!request.is_structured());
    }

    #[test]
    fn test_single_knob_overrides_parameters() {
        let request = Request::builder()
            .message(Message::user("test"))
            .parameters(Parameters {
                max_tokens: Some(500),
                temperature: Some(0.8),
            })
            .temperature(0.2)
            .build();

        assert_eq!(request.parameters.temperature, Some(0.2));
        assert_eq!(request.parameters.max_tokens, Some(500));
    }

    #[test]
    fn test_context_entries_are_kept_verbatim() {
        let request = Request::builder()
            .message(Message::user("test"))
            .context("customer_id", "CUST_001")
            .contexts([("priority", "high"), ("customer_id", "CUST_002")])
            .build();

        assert_eq!(request.context.len(), 2);
        assert_eq!(request.context["customer_id"], "CUST_002");
        assert_eq!(request.context["priority"], "high");
    }

    #[test]
    fn test_response_format_marks_structured() {
        let request = Request::builder()
            .message(Message::user("test"))
            .response_format(ResponseFormat::JsonSchema {
                name: "thing".into(),
                schema: json!({"type": "object"}),
                strict: true,
            })
            .build();

        assert!(request.is_structured());
    }
}

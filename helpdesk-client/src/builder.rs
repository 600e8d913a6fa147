//! Request builder for fluent API

use helpdesk_core::{
    Content, Message, Metadata, Model, Parameters, Request, ResponseFormat, Role,
    StructuredOutput,
};

/// Builder for constructing requests with a fluent API
///
/// # Examples
///
/// ```
/// use helpdesk_client::RequestBuilder;
///
/// let request = RequestBuilder::new()
///     .system("You are a helpful assistant")
///     .user("Where is my refund?")
///     .context("customer_id", "CUST_001")
///     .temperature(0.2)
///     .build();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.context["customer_id"], "CUST_001");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    inner: helpdesk_core::RequestBuilder,
}

impl RequestBuilder {
    /// Create a new request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system message
    pub fn system(self, content: impl Into<String>) -> Self {
        self.message(Role::System, content.into())
    }

    /// Add a user message
    pub fn user(self, content: impl Into<String>) -> Self {
        self.message(Role::User, content.into())
    }

    /// Add an assistant message
    pub fn assistant(self, content: impl Into<String>) -> Self {
        self.message(Role::Assistant, content.into())
    }

    /// Add a message with a specific role and content
    pub fn message(self, role: Role, content: impl Into<Content>) -> Self {
        self.with_message(Message {
            role,
            content: content.into(),
            metadata: Metadata::default(),
        })
    }

    /// Add a message with full control
    pub fn with_message(mut self, message: Message) -> Self {
        self.inner = self.inner.message(message);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.inner = self.inner.model(model);
        self
    }

    /// Set the temperature (0.0 to 2.0)
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.inner = self.inner.temperature(temperature);
        self
    }

    /// Set the maximum number of tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.inner = self.inner.max_tokens(max_tokens);
        self
    }

    /// Set custom parameters
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.inner = self.inner.parameters(parameters);
        self
    }

    /// Set the response format
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.inner = self.inner.response_format(format);
        self
    }

    /// Request structured output of a specific type
    pub fn with_structured_output<T: StructuredOutput>(mut self) -> Self {
        self.inner = self.inner.structured::<T>();
        self
    }

    /// Request JSON object output
    pub fn json_mode(self) -> Self {
        self.response_format(ResponseFormat::JsonObject)
    }

    /// Attach an opaque context entry for the provider
    pub fn context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.context(key, value);
        self
    }

    /// Attach several context entries
    pub fn contexts<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner = self.inner.contexts(entries);
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        self.inner.build()
    }
}

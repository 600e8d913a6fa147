//! High-level client implementation

use crate::RequestBuilder;
use helpdesk_core::{
    Content, Error, Model, Parameters, Provider, Request, Response, ResponseFormat, Role,
    StructuredOutput,
};
use tracing::debug;

/// High-level client for LLM interactions
///
/// # Examples
///
/// ```no_run
/// use helpdesk_client::Client;
/// use helpdesk_providers::OpenAI;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = OpenAI::with_api_key("your-api-key")?;
/// let client = Client::new(provider).with_model("gpt-4o-mini");
///
/// let response = client.request().user("Where is my refund?").send().await?;
/// println!("{}", response.content);
/// # Ok(())
/// # }
/// ```
pub struct Client<P: Provider> {
    pub(crate) provider: P,
    pub(crate) default_model: Model,
    pub(crate) default_parameters: Parameters,
}

impl<P: Provider> Client<P> {
    /// Create a new client with a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            default_model: Model::default(),
            default_parameters: Parameters::default(),
        }
    }

    /// Set the default model for requests
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Set default parameters for requests
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.default_parameters = parameters;
        self
    }

    /// The default model
    pub fn model(&self) -> &Model {
        &self.default_model
    }

    /// Create a request builder for more complex scenarios
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use helpdesk_client::Client;
    /// # use helpdesk_providers::OpenAI;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(OpenAI::with_api_key("key")?);
    /// let response = client
    ///     .request()
    ///     .system("You are a helpful assistant")
    ///     .user("What is the weather like?")
    ///     .temperature(0.7)
    ///     .max_tokens(100)
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request(&self) -> ConnectedRequestBuilder<'_, P> {
        ConnectedRequestBuilder {
            client: self,
            builder: RequestBuilder::new()
                .model(self.default_model.clone())
                .parameters(self.default_parameters.clone()),
        }
    }

    /// Get a reference to the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Execute a pre-built request
    pub async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            context_keys = request.context.len(),
            "Executing request"
        );
        self.provider.request(request).await
    }
}

/// Request builder connected to a client
pub struct ConnectedRequestBuilder<'a, P: Provider> {
    client: &'a Client<P>,
    builder: RequestBuilder,
}

impl<P: Provider> ConnectedRequestBuilder<'_, P> {
    /// Add a system message
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.builder = self.builder.system(content);
        self
    }

    /// Add a user message
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.builder = self.builder.user(content);
        self
    }

    /// Add a message with a specific role
    pub fn message(mut self, role: Role, content: impl Into<Content>) -> Self {
        self.builder = self.builder.message(role, content);
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<Model>) -> Self {
        self.builder = self.builder.model(model);
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.builder = self.builder.temperature(temperature);
        self
    }

    /// Set max tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.builder = self.builder.max_tokens(max_tokens);
        self
    }

    /// Set the response format
    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.builder = self.builder.response_format(format);
        self
    }

    /// Request structured output of a specific type
    pub fn with_structured_output<T: StructuredOutput>(mut self) -> Self {
        self.builder = self.builder.with_structured_output::<T>();
        self
    }

    /// Attach several context entries
    pub fn contexts<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.builder = self.builder.contexts(entries);
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        self.builder.build()
    }

    /// Send the request
    pub async fn send(self) -> Result<Response, Error> {
        self.client.execute(self.builder.build()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    // Mock provider for testing
    struct MockProvider {
        reply: String,
        seen: Mutex<Vec<Request>>,
    }

    impl MockProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl Provider for MockProvider {
        async fn request(&self, request: Request) -> Result<Response, Error> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::text(self.reply.clone()))
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Score {
        value: f64,
    }

    impl StructuredOutput for Score {
        fn schema() -> Value {
            json!({"type": "object", "properties": {"value": {"type": "number"}}})
        }
    }

    #[tokio::test]
    async fn test_request_builder_uses_client_defaults() {
        let client = Client::new(MockProvider::replying("ok"))
            .with_model("gpt-4o-mini")
            .with_parameters(Parameters {
                max_tokens: Some(256),
                temperature: None,
            });
        let response = client
            .request()
            .system("You are a helpful assistant")
            .user("Hello")
            .contexts([("k", "v")])
            .send()
            .await
            .unwrap();
        assert_eq!(response.content, "ok");

        let seen = client.provider().seen.lock().unwrap();
        assert_eq!(seen[0].model.0, "gpt-4o-mini");
        assert_eq!(seen[0].parameters.max_tokens, Some(256));
        assert_eq!(seen[0].messages.len(), 2);
        assert_eq!(seen[0].context["k"], "v");
        assert!(!seen[0].is_structured());
    }

    #[tokio::test]
    async fn test_structured_request_carries_schema() {
        let client = Client::new(MockProvider::replying(r#"{"value": 0.5}"#));
        let response = client
            .request()
            .user("rate")
            .temperature(0.0)
            .with_structured_output::<Score>()
            .send()
            .await
            .unwrap();
        assert_eq!(response.parse_json().unwrap()["value"], 0.5);

        let seen = client.provider().seen.lock().unwrap();
        assert_eq!(seen[0].response_format, Some(ResponseFormat::for_type::<Score>()));
        assert_eq!(seen[0].parameters.temperature, Some(0.0));
    }
}

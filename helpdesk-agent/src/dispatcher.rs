//! Query dispatch
//!
//! The [`Dispatcher`] makes exactly one model call per query and either
//! returns a response that has passed [`CustomerResponse::from_value`] or an
//! error. It holds no mutable state, so a single instance can serve any
//! number of concurrent `handle` calls; callers wanting a deadline wrap
//! `handle` in `tokio::time::timeout`.

use crate::config::DispatcherConfig;
use crate::error::SupportError;
use crate::prompt;
use crate::query::CustomerQuery;
use crate::response::CustomerResponse;
use helpdesk_client::Client;
use helpdesk_core::Provider;
use tracing::debug;

/// Turns validated queries into validated responses
pub struct Dispatcher<P: Provider> {
    client: Client<P>,
    config: DispatcherConfig,
}

impl<P: Provider> Dispatcher<P> {
    /// Dispatcher with the default configuration
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, DispatcherConfig::default())
    }

    /// Dispatcher with a custom configuration
    pub fn with_config(provider: P, config: DispatcherConfig) -> Self {
        let client = Client::new(provider)
            .with_model(config.model.clone())
            .with_parameters(config.parameters());
        Self { client, config }
    }

    /// Active configuration
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Underlying provider
    pub fn provider(&self) -> &P {
        self.client.provider()
    }

    /// Answer a query
    ///
    /// The reply is validated here even if the provider already enforced the
    /// schema. Collaborator failures and non-JSON output come back as
    /// [`SupportError::ExternalCall`]; JSON that breaks the response schema
    /// comes back as [`SupportError::Validation`].
    pub async fn handle(&self, query: &CustomerQuery) -> Result<CustomerResponse, SupportError> {
        debug!(
            customer_id = query.customer_id(),
            query_type = %query.query_type(),
            priority = %query.priority(),
            model = %self.client.model(),
            "Dispatching customer query"
        );

        let response = self
            .client
            .request()
            .system(self.config.system_prompt.as_str())
            .user(prompt::user_prompt(query))
            .with_structured_output::<CustomerResponse>()
            .contexts(query.context())
            .send()
            .await?;

        response
            .ensure_complete()
            .map_err(SupportError::ExternalCall)?;
        let value = response.parse_json().map_err(SupportError::ExternalCall)?;
        let validated = CustomerResponse::from_value(value)?;

        debug!(
            customer_id = query.customer_id(),
            response_id = validated.response_id(),
            confidence = validated.confidence_score(),
            escalation_required = validated.escalation_required(),
            "Customer response validated"
        );
        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Priority, QueryType};
    use helpdesk_core::{Error, Request, Response, ResponseFormat, Role, StructuredOutput};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Replies with a fixed outcome and remembers what it was asked
    struct StubProvider {
        reply: Mutex<Option<Result<Response, Error>>>,
        seen: Mutex<Vec<Request>>,
    }

    impl StubProvider {
        fn json(value: Value) -> Self {
            Self::outcome(Ok(Response::json(&value)))
        }

        fn outcome(outcome: Result<Response, Error>) -> Self {
            Self {
                reply: Mutex::new(Some(outcome)),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> Request {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Provider for StubProvider {
        async fn request(&self, request: Request) -> Result<Response, Error> {
            self.seen.lock().unwrap().push(request);
            self.reply
                .lock()
                .unwrap()
                .take()
                .expect("stub called more than once")
        }
    }

    fn billing_query() -> CustomerQuery {
        CustomerQuery::builder(
            "CUST_001",
            QueryType::Billing,
            "I was charged twice for my subscription this month.",
        )
        .priority(Priority::High)
        .build()
        .unwrap()
    }

    fn duplicate_charge_reply() -> Value {
        json!({
            "response_text": "We found a duplicate charge...",
            "confidence_score": 0.92,
            "suggested_actions": ["Refund duplicate charge"],
            "escalation_required": false,
            "response_id": "R-1"
        })
    }

    #[test_log::test(tokio::test)]
    async fn test_handle_success() {
        let dispatcher = Dispatcher::new(StubProvider::json(duplicate_charge_reply()));

        let response = dispatcher.handle(&billing_query()).await.unwrap();

        assert_eq!(response.response_text(), "We found a duplicate charge...");
        assert_eq!(response.confidence_score(), 0.92);
        assert_eq!(response.suggested_actions(), ["Refund duplicate charge"]);
        assert!(!response.escalation_required());
        assert_eq!(response.estimated_resolution_time(), None);
        assert_eq!(response.response_id(), "R-1");
    }

    #[tokio::test]
    async fn test_request_carries_prompt_schema_and_context() {
        let dispatcher = Dispatcher::new(StubProvider::json(duplicate_charge_reply()));
        let query = billing_query();
        dispatcher.handle(&query).await.unwrap();

        let request = dispatcher.provider().last_request();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[1].role, Role::User);
        let user = request.messages[1].content.as_text().unwrap();
        assert!(user.contains(query.message()));
        assert!(user.contains("Query Type: billing"));
        assert!(user.contains("Priority: high"));

        assert_eq!(
            request.response_format,
            Some(ResponseFormat::JsonSchema {
                name: "customer_response".into(),
                schema: CustomerResponse::schema(),
                strict: true,
            })
        );
        assert_eq!(request.context, query.context());
        assert_eq!(request.model.0, "gpt-4o");
    }

    #[tokio::test]
    async fn test_config_applied() {
        let config = DispatcherConfig::default()
            .with_model("gpt-4o-mini")
            .with_max_tokens(300)
            .with_system_prompt("Answer billing questions only.");
        let dispatcher =
            Dispatcher::with_config(StubProvider::json(duplicate_charge_reply()), config);
        dispatcher.handle(&billing_query()).await.unwrap();

        let request = dispatcher.provider().last_request();
        assert_eq!(request.model.0, "gpt-4o-mini");
        assert_eq!(request.parameters.max_tokens, Some(300));
        assert_eq!(
            request.messages[0].content.as_text(),
            Some("Answer billing questions only.")
        );
    }

    #[tokio::test]
    async fn test_missing_response_id_is_validation_error() {
        let mut reply = duplicate_charge_reply();
        reply.as_object_mut().unwrap().remove("response_id");
        let dispatcher = Dispatcher::new(StubProvider::json(reply));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert_eq!(err.validation().unwrap().fields(), vec!["response_id"]);
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_validation_error() {
        let mut reply = duplicate_charge_reply();
        reply["confidence_score"] = json!(1.5);
        let dispatcher = Dispatcher::new(StubProvider::json(reply));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert_eq!(err.validation().unwrap().fields(), vec!["confidence_score"]);
    }

    #[tokio::test]
    async fn test_collaborator_failure_propagates() {
        let dispatcher = Dispatcher::new(StubProvider::outcome(Err(Error::Network {
            message: "connection reset".into(),
            source: None,
        })));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        match err {
            SupportError::ExternalCall(Error::Network { message, .. }) => {
                assert_eq!(message, "connection reset");
            }
            other => panic!("Expected network failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_timeout_propagates() {
        let dispatcher = Dispatcher::new(StubProvider::outcome(Err(Error::Timeout)));
        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert!(matches!(err, SupportError::ExternalCall(Error::Timeout)));
    }

    #[tokio::test]
    async fn test_non_json_output_is_external_failure() {
        let dispatcher = Dispatcher::new(StubProvider::outcome(Ok(Response::text(
            "Sorry, I can only answer in prose.",
        ))));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert!(matches!(
            err,
            SupportError::ExternalCall(Error::Serialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_truncated_output_is_external_failure() {
        let mut response = Response::json(&duplicate_charge_reply());
        response.metadata.finish_reason = Some(helpdesk_core::FinishReason::Length);
        let dispatcher = Dispatcher::new(StubProvider::outcome(Ok(response)));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert!(matches!(
            err,
            SupportError::ExternalCall(Error::ResponseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_provider_side_validation_surfaces_as_validation() {
        let dispatcher = Dispatcher::new(StubProvider::outcome(Err(Error::Validation(
            helpdesk_core::ValidationError::single("response_id", "is required"),
        ))));

        let err = dispatcher.handle(&billing_query()).await.unwrap_err();
        assert!(err.is_validation());
    }
}

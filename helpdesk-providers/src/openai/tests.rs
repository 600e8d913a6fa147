//! Tests for the OpenAI provider against a mocked chat-completions endpoint

use super::*;
use crate::builder::{OpenAIBuilder, ProviderBuilder};
use crate::traits::{RequestConverter, ResponseParser};
use helpdesk_core::{Error, FinishReason, Message, Provider, Request, ResponseFormat};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "model": "gpt-4o-2024-08-06",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content, "refusal": null },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 8, "total_tokens": 20 }
    })
}

fn provider_for(server: &MockServer) -> OpenAI {
    OpenAIBuilder::new("sk-test")
        .base_url(format!("{}/v1", server.uri()))
        .build()
        .unwrap()
}

#[test]
fn test_convert_structured_request() {
    let request = Request::builder()
        .message(Message::system("Be brief"))
        .message(Message::user("Hello"))
        .model("gpt-4o")
        .temperature(0.2)
        .response_format(ResponseFormat::JsonSchema {
            name: "Reply".into(),
            schema: json!({"type": "object"}),
            strict: true,
        })
        .context("customer_id", "CUST_001")
        .build();

    let body = OpenAIConverter.convert_request(&request).unwrap();

    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["messages"][0], json!({"role": "system", "content": "Be brief"}));
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["response_format"],
        json!({
            "type": "json_schema",
            "json_schema": { "name": "Reply", "schema": {"type": "object"}, "strict": true }
        })
    );
    assert!(body.get("context").is_none());
    assert!(body.get("metadata").is_none());
}

#[test]
fn test_convert_json_object_mode() {
    let request = Request::builder()
        .message(Message::user("json please"))
        .response_format(ResponseFormat::JsonObject)
        .build();

    let body = OpenAIConverter.convert_request(&request).unwrap();
    assert_eq!(body["response_format"], json!({"type": "json_object"}));
}

#[test]
fn test_convert_rejects_empty_messages() {
    let request = Request::new(vec![]);
    assert!(matches!(
        OpenAIConverter.convert_request(&request),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_parse_response() {
    let response = OpenAIParser.parse_response(completion("{\"a\":1}")).unwrap();

    assert_eq!(response.content, "{\"a\":1}");
    assert_eq!(response.metadata.id.as_deref(), Some("chatcmpl-123"));
    assert_eq!(response.metadata.finish_reason, Some(FinishReason::Stop));
    assert_eq!(response.metadata.usage.unwrap().total_tokens, 20);
}

#[test]
fn test_parse_refusal() {
    let value = json!({
        "id": "x",
        "model": "gpt-4o",
        "choices": [{
            "message": { "content": null, "refusal": "I can't help with that." },
            "finish_reason": "stop"
        }]
    });
    assert!(matches!(
        OpenAIParser.parse_response(value),
        Err(Error::ResponseError { .. })
    ));
}

#[test]
fn test_parse_no_choices() {
    let value = json!({ "id": "x", "model": "gpt-4o", "choices": [] });
    let err = OpenAIParser.parse_response(value).unwrap_err();
    assert!(matches!(err, Error::Provider { status: None, .. }));
}

#[tokio::test]
async fn test_request_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "response_format": { "type": "json_schema" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let request = Request::builder()
        .message(Message::user("hi"))
        .response_format(ResponseFormat::JsonSchema {
            name: "Ok".into(),
            schema: json!({"type": "object"}),
            strict: true,
        })
        .build();

    let response = provider_for(&server).request(request).await.unwrap();
    assert_eq!(response.parse_json().unwrap(), json!({"ok": true}));
}

#[tokio::test]
async fn test_rate_limit_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .request(Request::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(429));
    assert!(err.to_string().ends_with("returned HTTP 429: rate limited"));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .request(Request::new(vec![Message::user("hi")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
}

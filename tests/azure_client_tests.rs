use std::time::Duration;

use oai_proxy::{
    AzureOpenAiClient, AzureOpenAiConfig, ChatCompletionsOptions, ChatMessage, ChatRole,
    ClientError, CompletionsOptions, HttpClientConfig, OpenAiApi, OpenAiProxy, ProxyConfig,
    ProxyError,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, Request as WiremockRequest, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const API_KEY: &str = "test-key";

fn client_for(server: &MockServer) -> AzureOpenAiClient {
    let config = AzureOpenAiConfig::new(server.uri(), API_KEY).with_http_config(HttpClientConfig {
        timeout: Duration::from_secs(5),
    });
    AzureOpenAiClient::new(config).expect("client builds")
}

fn completions_payload(text: &str) -> Value {
    json!({
        "id": "cmpl-123",
        "created": 1_700_000_000,
        "model": "text-davinci-003",
        "choices": [{
            "text": text,
            "index": 0,
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": {
            "prompt_tokens": 3,
            "completion_tokens": 4,
            "total_tokens": 7
        }
    })
}

fn chat_payload(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "created": 1_700_000_000,
        "model": "gpt-35-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

fn parse_body(request: &WiremockRequest) -> Value {
    serde_json::from_slice(&request.body).expect("request body should be valid json")
}

#[tokio::test]
async fn prompt_completion_posts_to_deployment() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4/completions"))
        .and(query_param("api-version", "2023-05-15"))
        .and(header("api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(completions_payload("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let completions = client
        .get_completions_for_prompt("gpt-4", "Hello")
        .await
        .expect("completion succeeds");

    assert_eq!(completions.choices[0].text, "Hi there");
    assert_eq!(completions.usage.as_ref().unwrap().total_tokens, 7);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(parse_body(&requests[0]), json!({ "prompt": ["Hello"] }));
}

#[tokio::test]
async fn options_are_serialized_as_given() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/davinci/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completions_payload("ok")))
        .mount(&server)
        .await;

    let options = CompletionsOptions::from_prompt("Summarize:")
        .with_max_tokens(32)
        .with_stop(vec!["###".to_string()]);

    client_for(&server)
        .get_completions("davinci", options)
        .await
        .expect("completion succeeds");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        parse_body(&requests[0]),
        json!({ "prompt": ["Summarize:"], "max_tokens": 32, "stop": ["###"] })
    );
}

#[tokio::test]
async fn chat_completion_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/chat/chat/completions"))
        .and(header("api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_payload("Hi there")))
        .mount(&server)
        .await;

    let options = ChatCompletionsOptions::new(vec![
        ChatMessage::system("Be brief."),
        ChatMessage::user("Hello"),
    ]);
    let chat = client_for(&server)
        .get_chat_completions("chat", options)
        .await
        .expect("chat succeeds");

    assert_eq!(chat.choices[0].message.role, ChatRole::Assistant);
    assert_eq!(chat.choices[0].message.content.as_deref(), Some("Hi there"));

    let requests = server.received_requests().await.unwrap();
    let body = parse_body(&requests[0]);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "Hello");
}

#[tokio::test]
async fn filtered_chat_reply_is_returned_without_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/chat/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-filtered",
            "created": 1_700_000_000,
            "choices": [{
                "index": 0,
                "finish_reason": "content_filter",
                "message": { "role": "assistant", "content": null }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let proxy = OpenAiProxy::new(client_for(&server), ProxyConfig::new("completions", "chat"));
    let chat = proxy
        .request_chat_completion(ChatCompletionsOptions::new(vec![ChatMessage::user("Hi")]))
        .await
        .expect("filtered reply is still a reply");

    assert_eq!(chat.id, "chatcmpl-filtered");
    assert_eq!(chat.choices[0].message.role, ChatRole::Assistant);
    assert_eq!(chat.choices[0].message.content, None);
    assert_eq!(chat.choices[0].finish_reason.as_deref(), Some("content_filter"));
}

#[tokio::test]
async fn error_status_becomes_http_error_with_body() {
    let server = MockServer::start().await;
    let error_body = json!({ "error": { "code": "429", "message": "rate limited" } });

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_completions_for_prompt("gpt-4", "Hello")
        .await
        .unwrap_err();

    match error {
        ClientError::Http(e) => {
            assert_eq!(e.status, 429);
            assert_eq!(e.value, error_body);
            assert!(e.message.contains("rate limited"));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_completions("gpt-4", CompletionsOptions::from_prompt("Hello"))
        .await
        .unwrap_err();

    match error {
        ClientError::Http(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.value, json!("bad request"));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_completions_for_prompt("gpt-4", "Hello")
        .await
        .unwrap_err();

    assert!(matches!(error, ClientError::Parse { .. }));
}

#[tokio::test]
async fn proxy_over_azure_client_translates_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/chat/chat/completions"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({ "error": { "message": "service unavailable" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let proxy = OpenAiProxy::new(client_for(&server), ProxyConfig::new("completions", "chat"));
    let error = proxy
        .request_chat_completion(ChatCompletionsOptions::new(vec![ChatMessage::user("Hi")]))
        .await
        .unwrap_err();

    match error {
        ProxyError::Upstream {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 503);
            assert!(message.starts_with("Error calling OpenAI API:Status code 503"));
            assert!(message.contains("service unavailable"));
        }
        other => panic!("Expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn proxy_over_azure_client_returns_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/deployments/gpt-4/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completions_payload("Hi there")))
        .mount(&server)
        .await;

    let proxy = OpenAiProxy::new(client_for(&server), ProxyConfig::new("gpt-4", "chat"));
    let completions = proxy.request_completion("Hello").await.unwrap();

    assert_eq!(completions.id, "cmpl-123");
    assert_eq!(completions.choices[0].text, "Hi there");
}

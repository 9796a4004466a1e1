use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use reqecho::config::ServerConfig;
use reqecho::routes::build_router;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(config: &ServerConfig, request: Request<Body>) -> (StatusCode, Value) {
    let response = build_router(config).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_echo_form_post() {
    let request = Request::builder()
        .method("POST")
        .uri("/submit?a=1&a=2&b=x")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("name=John%20Doe&tag=a&tag=b"))
        .unwrap();

    let (status, echo) = send(&ServerConfig::default(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["queryParameters"], json!({"a": "2", "b": "x"}));
    assert_eq!(echo["multiValueQueryParameters"], json!({"a": ["1", "2"], "b": ["x"]}));
    assert_eq!(echo["body"], json!({"name": "John Doe", "tag": ["a", "b"]}));
    assert_eq!(echo["headers"]["content-type"], "application/x-www-form-urlencoded");
}

#[tokio::test]
async fn test_echo_json_body() {
    let request = Request::builder()
        .method("PUT")
        .uri("/items/7")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"a":1,"nested":{"ok":true}}"#))
        .unwrap();

    let (status, echo) = send(&ServerConfig::default(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo["body"], json!({"a": 1, "nested": {"ok": true}}));
    assert_eq!(echo["queryParameters"], Value::Null);
    assert_eq!(echo["multiValueQueryParameters"], Value::Null);
}

#[tokio::test]
async fn test_echo_plain_get() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, echo) = send(&ServerConfig::default(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(echo["method"], "GET");
    assert_eq!(echo["body"], "");
}

#[tokio::test]
async fn test_echo_text_body_passthrough() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "text/plain")
        .body(Body::from("hello world"))
        .unwrap();

    let (_, echo) = send(&ServerConfig::default(), request).await;
    assert_eq!(echo["body"], "hello world");
}

#[tokio::test]
async fn test_invalid_json_fails_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();

    let (status, error) = send(&ServerConfig::default(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error["error"].as_str().unwrap().starts_with("Failed to decode JSON body"));
    assert!(error.get("body").is_none());
}

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let config = ServerConfig { body_limit: 8, ..ServerConfig::default() };
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from("this body is longer than eight bytes"))
        .unwrap();

    let (status, _) = send(&config, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

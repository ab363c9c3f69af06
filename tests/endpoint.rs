//! End-to-end tests against a running endpoint.

use std::time::Duration;

use chat_endpoint::chat::responses::candidates;
use chat_endpoint::chat::{ChatReply, ErrorBody};
use chat_endpoint::ServiceConfig;
use reqwest::{Method, StatusCode};

mod common;

#[tokio::test]
async fn test_chat_round_trip() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    let res = client
        .post(server.url())
        .json(&serde_json::json!({ "message": "hello" }))
        .send()
        .await
        .expect("endpoint unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    assert_eq!(res.headers()["content-type"], "application/json");

    let reply: ChatReply = res.json().await.unwrap();
    assert_eq!(reply.model, "gpt-4-turbo");
    assert!((50..=200).contains(&reply.tokens_used));
    assert!(candidates("hello").contains(&reply.response));

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_replies_vary_in_structure_only() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();
    let message = "Расскажи о трансформерах и механизме внимания, пожалуйста, подробно и с примерами";
    let options = candidates(message);

    for _ in 0..20 {
        let reply: ChatReply = client
            .post(server.url())
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(options.contains(&reply.response));
        assert_eq!(reply.model, "gpt-4-turbo");
        assert!((50..=200).contains(&reply.tokens_used));
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_preflight() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client()
        .request(Method::OPTIONS, server.url())
        .body("ignored")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type, X-User-Id");
    assert_eq!(headers["access-control-max-age"], "86400");
    assert_eq!(res.text().await.unwrap(), "");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_methods_not_allowed() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let res = client
            .request(method.clone(), format!("{}some/path", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "method: {method}");
        assert_eq!(res.headers()["access-control-allow-origin"], "*");
        assert_eq!(res.text().await.unwrap(), r#"{"error": "Method not allowed"}"#);
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_body() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client()
        .post(server.url())
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    let body: ErrorBody = res.json().await.unwrap();
    assert!(!body.error.is_empty());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_header() {
    let server = common::start_server(ServiceConfig::default()).await;

    let res = common::client().get(server.url()).send().await.unwrap();
    let id = res.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server(ServiceConfig::default()).await;
    assert_eq!(server.shutdown.receiver_count(), 1);

    assert_eq!(server.shutdown.trigger(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;

    let result = common::client().get(server.url()).send().await;
    assert!(result.is_err(), "server should stop accepting after shutdown");
}

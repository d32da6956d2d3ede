//! Integration tests for the query HTTP endpoint.
//!
//! These tests run the full router with the real reqwest-backed providers
//! pointed at wiremock servers, and an in-memory audit log:
//! 1. Every answered query is audited exactly once, with the lower-cased query
//! 2. Provider status failures become apologies, other failures propagate
//! 3. Error responses carry the same fixed headers as successes

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use query_router::adapters::audit::InMemoryAuditLog;
use query_router::adapters::chat::{MistralConfig, MistralProvider};
use query_router::adapters::http::{build_router, QueryAppState};
use query_router::adapters::joke::{OfficialJokeConfig, OfficialJokeProvider};
use query_router::adapters::weather::{OpenWeatherConfig, OpenWeatherProvider};
use query_router::application::handlers::RouteQueryHandler;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    audit: InMemoryAuditLog,
    server: MockServer,
}

impl TestApp {
    async fn start() -> Self {
        Self::start_with_audit(InMemoryAuditLog::new()).await
    }

    async fn start_with_audit(audit: InMemoryAuditLog) -> Self {
        let server = MockServer::start().await;
        let timeout = Duration::from_secs(5);

        let weather = OpenWeatherProvider::new(
            OpenWeatherConfig::new("owm-key")
                .with_base_url(format!("{}/data/2.5/weather", server.uri()))
                .with_timeout(timeout),
        )
        .unwrap();
        let joke = OfficialJokeProvider::new(
            OfficialJokeConfig::new(format!("{}/random_joke", server.uri())).with_timeout(timeout),
        )
        .unwrap();
        let chat = MistralProvider::new(
            MistralConfig::new("mistral-key")
                .with_model("mistral-small-latest")
                .with_url(format!("{}/v1/chat/completions", server.uri()))
                .with_timeout(timeout),
        )
        .unwrap();

        let handler = RouteQueryHandler::new(
            Arc::new(weather),
            Arc::new(joke),
            Arc::new(chat),
            Arc::new(audit.clone()),
        );
        let router = build_router(QueryAppState::new(handler), Duration::from_secs(10));

        Self {
            router,
            audit,
            server,
        }
    }

    async fn post(&self, body: impl Into<String>) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/query")
                    .header("content-type", "application/json")
                    .body(Body::from(body.into()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn mount_weather(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    async fn mount_joke(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/random_joke"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    async fn mount_chat(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_fixed_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "OPTIONS, POST, GET");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

fn weather_body(description: &str, temp: f64) -> Value {
    json!({
        "weather": [{"id": 800, "main": "Clear", "description": description}],
        "main": {"temp": temp, "humidity": 40},
        "name": "Paris"
    })
}

fn chat_body(content: &str) -> Value {
    json!({
        "model": "mistral-small-latest",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

// =============================================================================
// Success paths
// =============================================================================

#[tokio::test]
async fn weather_query_is_answered_and_audited_once() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "paris"))
        .and(query_param("appid", "owm-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("clear sky", 21.5)))
        .expect(1)
        .mount(&app.server)
        .await;

    let response = app
        .post(r#"{"query": "What's the Weather in Paris?"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_fixed_headers(&response);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"response": "Current weather in paris: clear sky, 21.5°C."})
    );

    let records = app.audit.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].query(), "what's the weather in paris?");
    assert_eq!(records[0].response(), body["response"].as_str().unwrap());
}

#[tokio::test]
async fn weather_without_city_asks_for_london() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body("mist", 8.0)))
        .expect(1)
        .mount(&app.server)
        .await;

    let response = app.post(r#"{"query": "weather"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Current weather in London: mist"));
}

#[tokio::test]
async fn weather_keyword_beats_joke_keyword() {
    let app = TestApp::start().await;
    app.mount_weather(200, weather_body("drizzle", 11.0)).await;
    Mock::given(method("GET"))
        .and(path("/random_joke"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    let response = app
        .post(r#"{"query": "tell me a joke about the weather"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Current weather in"));
}

#[tokio::test]
async fn joke_query_returns_setup_and_punchline() {
    let app = TestApp::start().await;
    app.mount_joke(
        200,
        json!({
            "type": "general",
            "setup": "Why did the scarecrow win an award?",
            "punchline": "Because he was outstanding in his field.",
            "id": 42
        }),
    )
    .await;

    let response = app.post(r#"{"query": "Tell me a JOKE"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"response": "Why did the scarecrow win an award? Because he was outstanding in his field."})
    );
    assert_eq!(app.audit.records().await[0].query(), "tell me a joke");
}

#[tokio::test]
async fn other_queries_go_to_chat() {
    let app = TestApp::start().await;
    app.mount_chat(200, chat_body("The capital of France is Paris."))
        .await;

    let response = app
        .post(r#"{"query": "What is the capital of France?"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"response": "The capital of France is Paris."})
    );
}

#[tokio::test]
async fn empty_and_missing_query_go_to_chat() {
    let app = TestApp::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("How can I help?")))
        .expect(2)
        .mount(&app.server)
        .await;

    for body in [r#"{"query": ""}"#, "{}"] {
        let response = app.post(body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let records = app.audit.records().await;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.query().is_empty()));
}

// =============================================================================
// Apologies
// =============================================================================

#[tokio::test]
async fn weather_status_failure_becomes_apology() {
    let app = TestApp::start().await;
    app.mount_weather(404, json!({"cod": "404", "message": "city not found"}))
        .await;

    let response = app.post(r#"{"query": "weather in atlantis"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"response": "Sorry, I couldn't retrieve the weather for that location."})
    );
    assert_eq!(app.audit.count().await, 1);
}

#[tokio::test]
async fn joke_status_failure_becomes_apology() {
    let app = TestApp::start().await;
    app.mount_joke(500, json!({"error": "boom"})).await;

    let response = app.post(r#"{"query": "joke"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"response": "Sorry, I couldn't fetch a joke at the moment."})
    );
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn malformed_json_is_rejected_with_fixed_headers() {
    let app = TestApp::start().await;

    let response = app.post("{\"query\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_fixed_headers(&response);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
    assert_eq!(body["code"], "MALFORMED_INPUT");
    assert_eq!(app.audit.count().await, 0);
}

#[tokio::test]
async fn misshapen_weather_body_is_upstream_failure() {
    let app = TestApp::start().await;
    app.mount_weather(200, json!({"weather": [], "main": {}})).await;

    let response = app.post(r#"{"query": "weather in oslo"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_fixed_headers(&response);
    assert_eq!(json_body(response).await["code"], "UPSTREAM_FAILURE");
    assert_eq!(app.audit.count().await, 0);
}

#[tokio::test]
async fn chat_status_failure_propagates() {
    let app = TestApp::start().await;
    app.mount_chat(401, json!({"message": "Unauthorized"})).await;

    let response = app.post(r#"{"query": "hello"}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_fixed_headers(&response);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UPSTREAM_FAILURE");
    assert!(body["error"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn audit_write_failure_fails_the_request() {
    let app = TestApp::start_with_audit(InMemoryAuditLog::failing("table missing")).await;
    app.mount_joke(200, json!({"setup": "Knock knock.", "punchline": "Who's there?"}))
        .await;

    let response = app.post(r#"{"query": "joke"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_fixed_headers(&response);
    assert_eq!(json_body(response).await["code"], "AUDIT_WRITE_FAILED");
}

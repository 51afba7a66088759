//! Integration tests for the relay HTTP surface.
//!
//! The router is wired with the real Groq and Telex clients, each pointed at
//! a wiremock server standing in for the upstream API.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use secrecy::Secret;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use telex_relay::adapters::ai::{GroqConfig, GroqProvider};
use telex_relay::adapters::http::{app_router, RelayAppState};
use telex_relay::adapters::storage::InMemoryConversationStore;
use telex_relay::adapters::telex::{TelexClient, TelexConfig};
use telex_relay::application::handlers::welcome_message;
use telex_relay::domain::conversation::FALLBACK_REPLY;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TELEX_KEY: &str = "telex-key";
const AGENT_ID: &str = "ai-agent-001";

struct Harness {
    app: Router,
    groq: MockServer,
    telex: MockServer,
}

impl Harness {
    async fn start() -> Self {
        Self::with_capacity(100).await
    }

    async fn with_capacity(capacity: usize) -> Self {
        let groq = MockServer::start().await;
        let telex = MockServer::start().await;

        let provider = GroqProvider::new(
            GroqConfig::new("groq-key")
                .with_base_url(groq.uri())
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        let relay = TelexClient::new(
            TelexConfig::new(TELEX_KEY)
                .with_base_url(telex.uri())
                .with_agent_id(AGENT_ID)
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap();

        let state = RelayAppState::new(
            Arc::new(InMemoryConversationStore::with_capacity(capacity)),
            Arc::new(provider),
            Arc::new(relay),
            AGENT_ID,
            Secret::new(TELEX_KEY.to_string()),
        );

        Self {
            app: app_router(state, Duration::from_secs(30)),
            groq,
            telex,
        }
    }

    async fn completion_replies(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": content}}]
            })))
            .mount(&self.groq)
            .await;
    }

    async fn telex_accepts(&self) {
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&self.telex)
            .await;
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        send(self.app.clone(), request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(post_request(uri, token, body)).await
    }

    async fn webhook(&self, body: Value) -> (StatusCode, Value) {
        self.post("/webhook/telex", TELEX_KEY, body).await
    }

    async fn direct(&self, user_id: &str, message: &str) -> (StatusCode, Value) {
        self.post(
            "/api/message",
            TELEX_KEY,
            json!({"userId": user_id, "message": message}),
        )
        .await
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_request(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn message_event(from: &str, content: &str) -> Value {
    json!({
        "event": "message.received",
        "message": {
            "id": "msg-1",
            "from": from,
            "to": AGENT_ID,
            "content": content,
            "timestamp": "2026-03-01T12:00:00Z",
            "type": "text"
        }
    })
}

// =============================================================================
// Webhook
// =============================================================================

#[tokio::test]
async fn webhook_message_is_answered_through_telex() {
    let h = Harness::start().await;
    h.completion_replies("Python is great for that.").await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("Authorization", "Bearer telex-key"))
        .and(body_partial_json(json!({
            "from": AGENT_ID,
            "to": "alice",
            "content": "Python is great for that.",
            "type": "text"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&h.telex)
        .await;

    let (status, body) = h
        .webhook(message_event("alice", "how do I parse JSON in python?"))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "Message processed"}));

    let (status, conversation) = h.get("/api/conversations/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(conversation["userId"], "alice");
    assert_eq!(conversation["messageCount"], 1);
    assert_eq!(conversation["topics"], json!(["programming", "tutorial"]));
    assert_eq!(conversation["lastMessage"], "how do I parse JSON in python?");
}

#[tokio::test]
async fn prompt_carries_turn_number_and_topics() {
    let h = Harness::start().await;
    h.telex_accepts().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{
                "role": "user",
                "content": "You are a helpful AI assistant integrated with Telex.im messaging platform. \
                            This is message #2 in the conversation. \
                            Previous topics discussed: weather. \
                            Respond naturally and helpfully to the following message:\n\nand tomorrow?"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Sunny."}}]
        })))
        .expect(1)
        .mount(&h.groq)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Rainy."}}]
        })))
        .mount(&h.groq)
        .await;

    h.webhook(message_event("bob", "weather today")).await;
    let (status, _) = h.webhook(message_event("bob", "and tomorrow?")).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn completion_failure_relays_fallback() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&h.groq)
        .await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_partial_json(json!({"content": FALLBACK_REPLY})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&h.telex)
        .await;

    let (status, body) = h.webhook(message_event("carol", "hello there")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn unauthorized_webhook_leaves_store_untouched() {
    let h = Harness::start().await;
    h.completion_replies("never").await;

    let (status, body) = h
        .post("/webhook/telex", "wrong-key", message_event("mallory", "hi"))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"status": "error", "message": "Unauthorized"}));

    let (_, metrics) = h.get("/api/metrics").await;
    assert_eq!(metrics["totalConversations"], 0);
    assert_eq!(metrics["totalMessages"], 0);
}

#[tokio::test]
async fn own_messages_are_ignored() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.groq)
        .await;

    let (status, body) = h.webhook(message_event(AGENT_ID, "echo")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ignored"}));
    let (status, _) = h.get(&format!("/api/conversations/{}", AGENT_ID)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn relay_failure_is_500_but_context_is_kept() {
    let h = Harness::start().await;
    h.completion_replies("reply").await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&h.telex)
        .await;

    let (status, body) = h.webhook(message_event("dave", "hello")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"status": "error", "message": "Failed to send response"})
    );
    let (_, conversation) = h.get("/api/conversations/dave").await;
    assert_eq!(conversation["messageCount"], 1);
}

#[tokio::test]
async fn user_joined_gets_welcome_message() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_partial_json(json!({
            "to": "u-42",
            "content": welcome_message("Erin")
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&h.telex)
        .await;

    let (status, body) = h
        .webhook(json!({
            "event": "user.joined",
            "user": {"id": "u-42", "username": "erin", "name": "Erin"}
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success"}));
}

#[tokio::test]
async fn welcome_failure_is_500() {
    let h = Harness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&h.telex)
        .await;

    let (status, body) = h
        .webhook(json!({
            "event": "user.joined",
            "user": {"id": "u-42", "username": "erin"}
        }))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to send welcome message");
}

#[tokio::test]
async fn unknown_events_are_acknowledged() {
    let h = Harness::start().await;

    let (status, body) = h.webhook(json!({"event": "channel.archived"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "acknowledged"}));
}

// =============================================================================
// Direct messages and status endpoints
// =============================================================================

#[tokio::test]
async fn direct_message_returns_reply_and_annotations() {
    let h = Harness::start().await;
    h.completion_replies("Hi Frank!").await;

    let (status, body) = h.direct("frank", "hello @grace #intro").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Hi Frank!");
    assert_eq!(body["intent"], "greeting");
    assert_eq!(body["entities"], json!({"mention": "@grace", "hashtag": "#intro"}));
    assert_eq!(body["confidence"], 0.9);
}

#[tokio::test]
async fn direct_message_with_missing_field_is_400() {
    let h = Harness::start().await;

    let (status, body) = h
        .post("/api/message", TELEX_KEY, json!({"userId": "frank"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn metrics_sum_across_users() {
    let h = Harness::start().await;
    h.completion_replies("ok").await;

    h.direct("u1", "one").await;
    h.direct("u1", "two").await;
    h.direct("u2", "three").await;

    let (status, metrics) = h.get("/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics["totalConversations"], 2);
    assert_eq!(metrics["totalMessages"], 3);
    assert_eq!(metrics["activeUsers"], 2);
    assert_eq!(metrics["aiProvider"], "groq");
    assert_eq!(metrics["model"], "llama-3.3-70b-versatile");
}

#[tokio::test]
async fn agent_info_reports_identity() {
    let h = Harness::start().await;

    let (status, info) = h.get("/api/agent/info").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["agentId"], AGENT_ID);
    assert_eq!(info["status"], "online");
    assert_eq!(info["model"], "llama-3.3-70b-versatile");
    assert!(info["uptime"].is_u64());
}

#[tokio::test]
async fn least_recent_conversation_is_evicted_at_capacity() {
    let h = Harness::with_capacity(2).await;
    h.completion_replies("ok").await;

    h.direct("first", "a").await;
    h.direct("second", "b").await;
    h.direct("first", "c").await;
    h.direct("third", "d").await;

    assert_eq!(h.get("/api/conversations/first").await.0, StatusCode::OK);
    assert_eq!(h.get("/api/conversations/second").await.0, StatusCode::NOT_FOUND);
    assert_eq!(h.get("/api/conversations/third").await.0, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_direct_messages_are_all_counted() {
    let h = Harness::start().await;
    h.completion_replies("ok").await;

    let tasks: Vec<_> = (0..25)
        .map(|i| {
            let request = post_request(
                "/api/message",
                TELEX_KEY,
                json!({"userId": "busy", "message": format!("message {i}")}),
            );
            tokio::spawn(send(h.app.clone(), request))
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap().0, StatusCode::OK);
    }

    let (_, conversation) = h.get("/api/conversations/busy").await;
    assert_eq!(conversation["messageCount"], 25);
}

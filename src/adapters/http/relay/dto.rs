//! Data transfer objects for relay HTTP endpoints.
//!
//! Field names follow the wire format Telex.im and existing clients expect,
//! which mixes camelCase and snake_case.

use serde::{Deserialize, Serialize};

use crate::application::handlers::WebhookOutcome;
use crate::domain::conversation::{AgentReply, ConversationContext, Entities, Intent, Topic};
use crate::ports::{ProviderInfo, StoreSnapshot};

/// Display name reported by the agent info endpoint.
pub const AGENT_NAME: &str = "Telex AI Assistant";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "telex-relay";

/// Capabilities advertised by the agent info endpoint.
pub const CAPABILITIES: &[&str] = &[
    "conversation",
    "context-awareness",
    "multi-turn-dialogue",
    "ultra-fast-inference",
];

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/message`.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported with the same 400 body as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectMessageRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Webhook acknowledgement, e.g. `{"status":"success","message":"Message processed"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookStatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookStatusResponse {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

impl From<WebhookOutcome> for WebhookStatusResponse {
    fn from(outcome: WebhookOutcome) -> Self {
        match outcome {
            WebhookOutcome::Processed(_) => Self {
                status: "success".to_string(),
                message: Some("Message processed".to_string()),
            },
            WebhookOutcome::Ignored => Self::status("ignored"),
            WebhookOutcome::Welcomed => Self::status("success"),
            WebhookOutcome::Acknowledged => Self::status("acknowledged"),
        }
    }
}

/// Reply to a direct message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReplyResponse {
    pub reply: String,
    pub intent: Intent,
    pub entities: Entities,
    pub confidence: f64,
}

impl From<AgentReply> for AgentReplyResponse {
    fn from(reply: AgentReply) -> Self {
        Self {
            reply: reply.reply,
            intent: reply.intent,
            entities: reply.entities,
            confidence: reply.confidence,
        }
    }
}

/// Error body for the direct-message and conversation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub ai_provider: String,
}

impl HealthResponse {
    pub fn healthy(provider: &ProviderInfo) -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            ai_provider: provider.name.clone(),
        }
    }
}

/// `GET /api/agent/info`.
#[derive(Debug, Clone, Serialize)]
pub struct AgentInfoResponse {
    #[serde(rename = "agentId")]
    pub agent_id: String,
    pub name: &'static str,
    pub version: &'static str,
    pub ai_provider: String,
    pub model: String,
    pub capabilities: &'static [&'static str],
    pub status: &'static str,
    /// Seconds since the service started.
    pub uptime: u64,
}

/// `GET /api/conversations/:user_id`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub user_id: String,
    pub message_count: u64,
    pub topics: Vec<Topic>,
    pub last_message: String,
    pub timestamp: String,
}

impl From<ConversationContext> for ConversationResponse {
    fn from(context: ConversationContext) -> Self {
        Self {
            user_id: context.user_id().to_string(),
            message_count: context.message_count(),
            topics: context.topics().to_vec(),
            last_message: context.last_message().to_string(),
            timestamp: context.timestamp().as_datetime().to_rfc3339(),
        }
    }
}

/// `GET /api/metrics`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub total_conversations: usize,
    pub total_messages: u64,
    pub active_users: usize,
    pub ai_provider: String,
    pub model: String,
    pub timestamp: String,
}

impl MetricsResponse {
    pub fn new(snapshot: StoreSnapshot, provider: ProviderInfo) -> Self {
        Self {
            total_conversations: snapshot.conversation_count,
            total_messages: snapshot.total_messages,
            active_users: snapshot.conversation_count,
            ai_provider: provider.name,
            model: provider.model,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use serde_json::json;

    #[test]
    fn direct_message_request_deserializes_camel_case() {
        let request: DirectMessageRequest =
            serde_json::from_value(json!({"userId": "u1", "message": "hi"})).unwrap();
        assert_eq!(request.user_id.as_deref(), Some("u1"));
        assert_eq!(request.message.as_deref(), Some("hi"));
    }

    #[test]
    fn direct_message_request_tolerates_missing_fields() {
        let request: DirectMessageRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.user_id.is_none());
        assert!(request.message.is_none());
    }

    #[test]
    fn webhook_status_omits_empty_message() {
        let value = serde_json::to_value(WebhookStatusResponse::status("ignored")).unwrap();
        assert_eq!(value, json!({"status": "ignored"}));
    }

    #[test]
    fn webhook_outcomes_map_to_status_bodies() {
        let processed = AgentReply::generated("ok", "hi");
        assert_eq!(
            serde_json::to_value(WebhookStatusResponse::from(WebhookOutcome::Processed(processed)))
                .unwrap(),
            json!({"status": "success", "message": "Message processed"})
        );
        assert_eq!(
            WebhookStatusResponse::from(WebhookOutcome::Welcomed),
            WebhookStatusResponse::status("success")
        );
        assert_eq!(
            WebhookStatusResponse::from(WebhookOutcome::Acknowledged),
            WebhookStatusResponse::status("acknowledged")
        );
    }

    #[test]
    fn agent_reply_response_serializes_annotations() {
        let reply = AgentReply::generated("Sure", "help @bob with #rust");
        let value = serde_json::to_value(AgentReplyResponse::from(reply)).unwrap();

        assert_eq!(value["reply"], "Sure");
        assert_eq!(value["intent"], "help_request");
        assert_eq!(value["entities"], json!({"mention": "@bob", "hashtag": "#rust"}));
        assert_eq!(value["confidence"], 0.9);
    }

    #[test]
    fn conversation_response_uses_camel_case() {
        let mut context = ConversationContext::new(UserId::new("u1").unwrap());
        context.record_message("python weather", Timestamp::now());

        let value = serde_json::to_value(ConversationResponse::from(context)).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["messageCount"], 1);
        assert_eq!(value["topics"], json!(["programming", "weather"]));
        assert_eq!(value["lastMessage"], "python weather");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn metrics_response_reports_snapshot() {
        let snapshot = StoreSnapshot {
            conversation_count: 2,
            total_messages: 5,
        };
        let value = serde_json::to_value(MetricsResponse::new(
            snapshot,
            ProviderInfo::new("groq", "llama-3.3-70b-versatile"),
        ))
        .unwrap();

        assert_eq!(value["totalConversations"], 2);
        assert_eq!(value["totalMessages"], 5);
        assert_eq!(value["activeUsers"], 2);
        assert_eq!(value["aiProvider"], "groq");
        assert_eq!(value["model"], "llama-3.3-70b-versatile");
    }

    #[test]
    fn agent_info_keeps_mixed_field_names() {
        let info = AgentInfoResponse {
            agent_id: "ai-agent-001".to_string(),
            name: AGENT_NAME,
            version: "1.0.0",
            ai_provider: "groq".to_string(),
            model: "m".to_string(),
            capabilities: CAPABILITIES,
            status: "online",
            uptime: 12,
        };
        let value = serde_json::to_value(info).unwrap();

        assert_eq!(value["agentId"], "ai-agent-001");
        assert_eq!(value["ai_provider"], "groq");
        assert_eq!(value["capabilities"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["uptime"], 12);
    }
}

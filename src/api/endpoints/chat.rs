//! Chat endpoints.
//!
//! - `POST /api/chat`: evaluate one triage turn
//! - `GET /api/chat/suggestions`: empty-state quick replies + commands hint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::config::MAX_MESSAGE_LEN;
use crate::triage::messages::{self, ONBOARDING_QUICK_REPLIES};
use crate::triage::{ChatResponse, ContextTag, ConversationContext, TriageEngine};

/// A chat turn request, deserialized leniently.
///
/// Clients are messy: a missing, null, or non-string `message` is coerced
/// to empty and routed to the greeting branch, never a hard failure. The
/// context's `lastCategory` arrives as an arbitrary string; values the
/// engine does not recognize resolve to "no usable category".
#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_context")]
    pub context: ConversationContext,
}

fn lenient_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_context<'de, D>(deserializer: D) -> Result<ConversationContext, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tag = value
        .get("lastCategory")
        .and_then(serde_json::Value::as_str)
        .and_then(ContextTag::parse);
    Ok(ConversationContext { last_category: tag })
}

/// `POST /api/chat`: run one turn of the triage engine.
pub async fn turn(
    State(engine): State<Arc<TriageEngine>>,
    Json(req): Json<ChatTurnRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.message.len() > MAX_MESSAGE_LEN {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {MAX_MESSAGE_LEN} chars)"
        )));
    }
    Ok(Json(engine.respond(&req.message, &req.context)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub commands_hint: Vec<String>,
}

/// `GET /api/chat/suggestions`: fixed quick replies for an empty chat.
pub async fn suggestions(
    State(_engine): State<Arc<TriageEngine>>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: ONBOARDING_QUICK_REPLIES.iter().map(|s| s.to_string()).collect(),
        commands_hint: messages::commands_hint(),
    })
}

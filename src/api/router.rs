//! Chat API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The engine is injected as shared state; there is no session storage,
//! clients thread the conversation context through request/response.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::triage::TriageEngine;

/// Build the chat API router with all endpoints under `/api/`.
pub fn chat_router(engine: Arc<TriageEngine>) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route("/api/chat", post(endpoints::chat::turn))
        .route("/api/chat/suggestions", get(endpoints::chat::suggestions))
        .with_state(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::catalog::Catalog;

    fn app() -> Router {
        chat_router(Arc::new(TriageEngine::new(Catalog::default())))
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_response_shape() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "ok");
        assert!(!json["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_message_onboards() {
        let response = app().oneshot(chat_request(r#"{"message":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert!(json["bot"].as_str().unwrap().starts_with("Namaste"));
        let suggestions = json["suggestions"].as_array().unwrap();
        assert!(suggestions.iter().any(|s| s == "Start Consultation"));
    }

    #[tokio::test]
    async fn missing_message_field_onboards_too() {
        let response = app().oneshot(chat_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert!(json["bot"].as_str().unwrap().starts_with("Namaste"));
    }

    #[tokio::test]
    async fn non_string_message_is_coerced_to_empty() {
        for body in [
            r#"{"message":42}"#,
            r#"{"message":null}"#,
            r#"{"message":["recommend"]}"#,
        ] {
            let response = app().oneshot(chat_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{body} hard-failed");

            let json = response_json(response).await;
            assert!(json["bot"].as_str().unwrap().starts_with("Namaste"));
        }
    }

    #[tokio::test]
    async fn unrecognized_last_category_is_ignored() {
        let response = app()
            .oneshot(chat_request(
                r#"{"message":"recommend","context":{"lastCategory":"banana"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Same guidance as an empty context: ask for a symptom first.
        let json = response_json(response).await;
        assert!(json["bot"].as_str().unwrap().contains("symptom"));
        assert!(json.get("recommendations").is_none());
    }

    #[tokio::test]
    async fn non_object_context_is_ignored() {
        let response = app()
            .oneshot(chat_request(r#"{"message":"recommend","context":null}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert!(json["bot"].as_str().unwrap().contains("symptom"));
    }

    #[tokio::test]
    async fn knee_symptom_sets_context_and_recommendations() {
        let response = app()
            .oneshot(chat_request(
                r#"{"message":"symptom: my knee hurts when climbing stairs"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["context"]["lastCategory"], "knee");
        assert_eq!(json["recommendations"][0]["id"], "exercise-therapy");
    }

    #[tokio::test]
    async fn book_returns_booking_cta() {
        let response = app()
            .oneshot(chat_request(r#"{"message":"book exercise therapy"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["cta"]["url"], "/book?treatment=exercise-therapy");
    }

    #[tokio::test]
    async fn red_flag_message_has_no_recommendations_or_cta_keys() {
        let response = app()
            .oneshot(chat_request(r#"{"message":"I feel dizzy and nauseous"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        // Unset optional fields are omitted entirely, not null.
        assert!(json.get("recommendations").is_none());
        assert!(json.get("cta").is_none());
        assert!(json.get("context").is_none());
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn context_threads_across_turns() {
        // Turn 1: describe a symptom, capture returned context.
        let response = app()
            .oneshot(chat_request(r#"{"message":"symptom: stiff neck"}"#))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert_eq!(json["context"]["lastCategory"], "neck");

        // Turn 2: replay that context with `recommend`.
        let body = format!(
            r#"{{"message":"recommend","context":{}}}"#,
            json["context"]
        );
        let response = app().oneshot(chat_request(&body)).await.unwrap();
        let json = response_json(response).await;
        assert_eq!(json["recommendations"][0]["id"], "cervical-mobilization");
        assert_eq!(
            json["cta"]["url"],
            "/book?treatment=cervical-mobilization"
        );
    }

    #[tokio::test]
    async fn recommend_without_context_has_no_recommendations() {
        let response = app()
            .oneshot(chat_request(r#"{"message":"recommend"}"#))
            .await
            .unwrap();
        let json = response_json(response).await;
        assert!(json.get("recommendations").is_none());
        assert!(json["bot"].as_str().unwrap().contains("symptom"));
    }

    #[tokio::test]
    async fn oversized_message_is_rejected() {
        let long = "a".repeat(2001);
        let body = format!(r#"{{"message":"{long}"}}"#);
        let response = app().oneshot(chat_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn suggestions_endpoint_shape() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/chat/suggestions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let suggestions = json["suggestions"].as_array().unwrap();
        assert!(suggestions.iter().any(|s| s == "Start Consultation"));
        assert!(!json["commandsHint"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

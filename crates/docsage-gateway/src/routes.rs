//! API route handlers for the gateway.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use docsage_core::error::DocSageError;
use docsage_engine::AskReply;

use super::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

type AskResult = Result<Json<AskReply>, (StatusCode, Json<serde_json::Value>)>;

/// Health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "docsage-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// System information endpoint.
pub async fn system_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.engine.provider_name(),
        "model": state.engine.model_name(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
        "gateway": {
            "host": state.config.host,
            "port": state.config.port,
        },
    }))
}

/// Answer a question against the document corpus.
///
/// Validation failures come back as 400 with the reason; everything else
/// is logged under the request id and surfaces as a generic 500.
pub async fn ask(State(state): State<Arc<AppState>>, Json(req): Json<AskRequest>) -> AskResult {
    let request_id = uuid::Uuid::new_v4().to_string();

    match state.engine.ask(&req.prompt, &request_id).await {
        Ok(reply) => Ok(Json(reply)),
        Err(DocSageError::InvalidPrompt(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": msg }))))
        }
        Err(e) => {
            tracing::error!(request_id, error = %e, "unhandled request failure");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Internal server error" })),
            ))
        }
    }
}

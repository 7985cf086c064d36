//! HTTP server implementation using Axum.

use std::sync::Arc;
use std::time::Instant;

use axum::http::{HeaderValue, Method};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use docsage_core::config::GatewayConfig;
use docsage_engine::AnswerEngine;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub engine: Arc<AnswerEngine>,
    pub start_time: Instant,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
            .max_age(std::time::Duration::from_secs(3600));

        if state.config.cors_origins.is_empty() {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = state
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
                .collect();
            cors.allow_origin(origins)
        }
    };

    Router::new()
        .route("/api/v1/ask", post(super::routes::ask))
        .route("/api/v1/info", get(super::routes::system_info))
        .route("/health", get(super::routes::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server.
pub async fn start(config: &GatewayConfig, engine: Arc<AnswerEngine>) -> anyhow::Result<()> {
    let state = AppState {
        config: config.clone(),
        engine,
        start_time: Instant::now(),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🌐 Gateway listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

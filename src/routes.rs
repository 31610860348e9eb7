use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::{
    bot::WeatherBot,
    telegram::{client::TelegramClient, handle_update, types::Update},
};

pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<WeatherBot>,
    pub telegram: Arc<TelegramClient>,
    pub webhook_secret: Option<Arc<str>>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn telegram_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> StatusCode {
    if let Some(secret) = state.webhook_secret.as_deref() {
        let presented = headers.get(SECRET_HEADER).and_then(|v| v.to_str().ok());
        if presented != Some(secret) {
            tracing::warn!(update_id = update.update_id, "rejecting webhook call with bad secret");
            return StatusCode::UNAUTHORIZED;
        }
    }

    // Telegram redelivers on non-2xx, so a failed reply is only logged.
    if let Err(e) = handle_update(&state.bot, &state.telegram, &update).await {
        tracing::error!(update_id = update.update_id, "failed to send reply: {}", e);
    }
    StatusCode::OK
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/telegram/webhook", post(telegram_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

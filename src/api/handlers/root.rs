use axum::{extract::State, http::StatusCode, Json, response::IntoResponse};
use serde_json::json;

use crate::api::state::AppState;

pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "Bulletin API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Announcements for the school activities site",
        "status": "operational",
        "listening_on": state.settings.bind_address(),
        "endpoints": {
            "health": "/health",
            "announcements": "/announcements",
            "all_announcements": "/announcements/all"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SystemInfoResponse {
    pub server_version: String,
    /// Header display time; updated once a minute by the clock task
    pub display_time: String,
    pub active_sessions: usize,
    pub uptime_seconds: u64,
    /// Timestamp when this info was generated
    pub timestamp: String,
}

/// Server information for the dashboard header
#[utoipa::path(
    get,
    path = "/api/system/info",
    responses(
        (status = 200, description = "Server information", body = SystemInfoResponse)
    ),
    tag = "system"
)]
pub async fn get_system_info(State(state): State<AppState>) -> Json<SystemInfoResponse> {
    Json(SystemInfoResponse {
        server_version: env!("CARGO_PKG_VERSION").to_string(),
        display_time: state.clock.display_time().await.to_rfc3339(),
        active_sessions: state.sessions.active_sessions().await,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/info", get(get_system_info)).with_state(state)
}

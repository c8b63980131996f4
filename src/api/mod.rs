pub mod admin;
pub mod auth;
pub mod health;
pub mod operations;
pub mod stations;
pub mod system;

use axum::http::{HeaderMap, StatusCode};
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{AuthError, Session, SessionManager};
use crate::services::clock::WallClock;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub clock: WallClock,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Header carrying the session token issued at login.
pub const SESSION_HEADER: &str = "x-session-token";

/// Resolve the session for the request, or 401.
pub(crate) async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Session, ApiError> {
    let token = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "Missing or malformed session token"))?;

    state
        .sessions
        .get(&token)
        .await
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, AuthError::UnknownSession.to_string()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state.clone()))
        .nest("/operations", operations::router(state.clone()))
        .nest("/admin", admin::router(state.clone()))
        .nest("/stations", stations::router(state.clone()))
        .nest("/health", health::router(state.clone()))
        .nest("/system", system::router(state))
}

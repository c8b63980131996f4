use axum::http::{HeaderMap, StatusCode};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::{error, require_session, ApiError, AppState, ErrorResponse};
use crate::auth::{Role, User};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Session token; send it back in the X-Session-Token header
    pub token: Uuid,
    pub user: User,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DemoLoginRequest {
    pub role: Role,
}

/// Sign in with allow-list credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .sessions
        .login(&request.username, &request.password)
        .await
        .map_err(|e| error(StatusCode::UNAUTHORIZED, e.to_string()))?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user,
    }))
}

/// Sign in via the demo shortcut for a role
#[utoipa::path(
    post,
    path = "/api/auth/demo-login",
    request_body = DemoLoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "No demo account for the role", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn demo_login(
    State(state): State<AppState>,
    Json(request): Json<DemoLoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .sessions
        .demo_login(request.role)
        .await
        .map_err(|e| error(StatusCode::UNAUTHORIZED, e.to_string()))?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user,
    }))
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session closed"),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session = require_session(&state, &headers).await?;
    state.sessions.logout(&session.token).await;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/demo-login", post(demo_login))
        .route("/logout", post(logout))
        .with_state(state)
}

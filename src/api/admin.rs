use axum::http::{HeaderMap, StatusCode};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::{error, require_session, ApiError, AppState, ErrorResponse};
use crate::auth::{AuthError, DashboardHandle};
use crate::models::{AdminBundle, OperatingMode};
use crate::services::classify::{self, EfficiencyRating};
use crate::services::dashboard::AdminProvider;

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboardResponse {
    pub mode: OperatingMode,
    pub data: AdminBundle,
    /// Rating band for the current energy-savings figure
    pub energy_rating: EfficiencyRating,
    /// Whether a timed mode switch or refresh is currently in flight
    pub busy: bool,
    pub timestamp: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModeRequest {
    pub mode: OperatingMode,
}

async fn admin_provider(state: &AppState, headers: &HeaderMap) -> Result<AdminProvider, ApiError> {
    let session = require_session(state, headers).await?;
    match session.dashboard {
        DashboardHandle::Admin(provider) => Ok(provider),
        DashboardHandle::Operations(_) => Err(error(
            StatusCode::FORBIDDEN,
            AuthError::RoleMismatch.to_string(),
        )),
    }
}

fn response(mode: OperatingMode, data: AdminBundle, busy: bool) -> Json<AdminDashboardResponse> {
    let energy_rating = classify::efficiency_rating(data.metrics.energy_savings);
    Json(AdminDashboardResponse {
        mode,
        data,
        energy_rating,
        busy,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Current admin dashboard dataset and mode
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Admin dashboard snapshot", body = AdminDashboardResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Session is not an admin session", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminDashboardResponse>, ApiError> {
    let provider = admin_provider(&state, &headers).await?;
    let busy = provider.is_busy();
    let mode = provider.mode().await;
    Ok(response(mode, provider.snapshot().await, busy))
}

/// Switch the admin dashboard operating mode
#[utoipa::path(
    post,
    path = "/api/admin/mode",
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Mode dataset applied", body = AdminDashboardResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Session is not an admin session", body = ErrorResponse),
        (status = 409, description = "Another operation is in flight", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn select_mode(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ModeRequest>,
) -> Result<Json<AdminDashboardResponse>, ApiError> {
    let provider = admin_provider(&state, &headers).await?;
    let data = provider
        .select_mode(request.mode)
        .await
        .map_err(|e| error(StatusCode::CONFLICT, e.to_string()))?;
    let mode = provider.mode().await;
    Ok(response(mode, data, provider.is_busy()))
}

/// Regenerate the admin dataset for the current mode
#[utoipa::path(
    post,
    path = "/api/admin/refresh",
    responses(
        (status = 200, description = "Refreshed dataset", body = AdminDashboardResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Session is not an admin session", body = ErrorResponse),
        (status = 409, description = "Another operation is in flight", body = ErrorResponse)
    ),
    tag = "admin"
)]
pub async fn refresh_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<AdminDashboardResponse>, ApiError> {
    let provider = admin_provider(&state, &headers).await?;
    let data = provider
        .refresh()
        .await
        .map_err(|e| error(StatusCode::CONFLICT, e.to_string()))?;
    let mode = provider.mode().await;
    Ok(response(mode, data, false))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/mode", post(select_mode))
        .route("/refresh", post(refresh_dashboard))
        .with_state(state)
}

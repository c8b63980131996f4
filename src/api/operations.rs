use axum::http::{HeaderMap, StatusCode};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::{error, require_session, ApiError, AppState, ErrorResponse};
use crate::auth::{AuthError, DashboardHandle};
use crate::models::OperationsBundle;
use crate::services::dashboard::OperationsProvider;

#[derive(Debug, Serialize, ToSchema)]
pub struct OperationsDashboardResponse {
    pub data: OperationsBundle,
    /// Whether a timed refresh is currently in flight
    pub busy: bool,
    pub timestamp: String,
}

async fn operations_provider(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<OperationsProvider, ApiError> {
    let session = require_session(state, headers).await?;
    match session.dashboard {
        DashboardHandle::Operations(provider) => Ok(provider),
        DashboardHandle::Admin(_) => Err(error(
            StatusCode::FORBIDDEN,
            AuthError::RoleMismatch.to_string(),
        )),
    }
}

fn response(data: OperationsBundle, busy: bool) -> Json<OperationsDashboardResponse> {
    Json(OperationsDashboardResponse {
        data,
        busy,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Current operations dashboard dataset
#[utoipa::path(
    get,
    path = "/api/operations/dashboard",
    responses(
        (status = 200, description = "Operations dashboard snapshot", body = OperationsDashboardResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Session is not an operations session", body = ErrorResponse)
    ),
    tag = "operations"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OperationsDashboardResponse>, ApiError> {
    let provider = operations_provider(&state, &headers).await?;
    let busy = provider.is_busy();
    Ok(response(provider.snapshot().await, busy))
}

/// Regenerate the operations dataset with synthetic variation
#[utoipa::path(
    post,
    path = "/api/operations/refresh",
    responses(
        (status = 200, description = "Refreshed dataset", body = OperationsDashboardResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 403, description = "Session is not an operations session", body = ErrorResponse),
        (status = 409, description = "Another operation is in flight", body = ErrorResponse)
    ),
    tag = "operations"
)]
pub async fn refresh_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OperationsDashboardResponse>, ApiError> {
    let provider = operations_provider(&state, &headers).await?;
    let data = provider
        .refresh()
        .await
        .map_err(|e| error(StatusCode::CONFLICT, e.to_string()))?;
    Ok(response(data, false))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/refresh", post(refresh_dashboard))
        .with_state(state)
}

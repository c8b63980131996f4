use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::datasets::{admin, festival, simulation, stations};
use crate::models::StatusSeverity;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is running
    pub healthy: bool,
    /// Number of train runs in the normal-mode schedule
    pub normal_schedule_entries: usize,
    /// Number of train runs in the simulation schedule
    pub simulation_schedule_entries: usize,
    /// Number of train runs in the festival schedule
    pub festival_schedule_entries: usize,
    /// Number of stations in the heatmap table
    pub station_count: usize,
    /// Normal-schedule runs currently classified as delayed
    pub delayed_trains: usize,
    /// Number of open sessions
    pub active_sessions: usize,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service health status", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let normal_schedule = admin::train_schedule();
    let delayed_trains = normal_schedule
        .iter()
        .filter(|t| t.status.severity() == StatusSeverity::Warning)
        .count();

    Json(HealthResponse {
        healthy: true,
        normal_schedule_entries: normal_schedule.len(),
        simulation_schedule_entries: simulation::train_schedule().len(),
        festival_schedule_entries: festival::train_schedule().len(),
        station_count: stations::station_loads().len(),
        delayed_trains,
        active_sessions: state.sessions.active_sessions().await,
    })
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(health_check)).with_state(state)
}

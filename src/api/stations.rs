use axum::http::HeaderMap;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::{require_session, ApiError, AppState, ErrorResponse};
use crate::datasets::stations;
use crate::models::{LoadIntensity, Trend};
use crate::services::classify;

#[derive(Debug, Serialize, ToSchema)]
pub struct StationLoadView {
    pub name: String,
    pub passengers: u32,
    pub capacity: u32,
    pub trend: Trend,
    pub intensity: LoadIntensity,
    /// Rounded passengers/capacity percentage for the load bar
    pub load_pct: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StationListResponse {
    pub stations: Vec<StationLoadView>,
    pub total: usize,
}

/// Station density heatmap rows
#[utoipa::path(
    get,
    path = "/api/stations",
    responses(
        (status = 200, description = "Station load table", body = StationListResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    tag = "stations"
)]
pub async fn list_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StationListResponse>, ApiError> {
    require_session(&state, &headers).await?;

    let stations: Vec<StationLoadView> = stations::station_loads()
        .into_iter()
        .map(|s| StationLoadView {
            load_pct: classify::load_percentage(s.passengers, s.capacity),
            name: s.name,
            passengers: s.passengers,
            capacity: s.capacity,
            trend: s.trend,
            intensity: s.intensity,
        })
        .collect();
    let total = stations.len();

    Ok(Json(StationListResponse { stations, total }))
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(list_stations)).with_state(state)
}

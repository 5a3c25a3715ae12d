use crate::api::error::ApiError;
use crate::api::types::{AppState, CoordinatesRequest};
use crate::nearest::{ClosestLocations, NearestLocations, closest_by_category, nearest_by_category};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{debug, info, instrument};

const NEAREST_LIMIT: usize = 3;

/// `POST /nearest_locations` — the three closest hospitals and police stations, matched leniently on the kind.
#[instrument(skip_all)]
pub async fn top(
    State(state): State<AppState>,
    payload: Result<Json<CoordinatesRequest>, JsonRejection>,
) -> Result<Json<NearestLocations>, ApiError> {
    let Json(coordinates) = payload?;
    let origin = coordinates.require()?;
    info!(latitude = origin.latitude, longitude = origin.longitude, "🔎 Looking up nearest safety locations");

    let nearest = nearest_by_category(&state.locations, &origin, NEAREST_LIMIT);
    debug!("Found {} hospital(s) and {} police station(s)", nearest.hospitals.len(), nearest.police_stations.len());

    Ok(Json(nearest))
}

/// `POST /nearest-locations` — the single closest hospital and police station, matched exactly on the kind.
#[instrument(skip_all)]
pub async fn closest(
    State(state): State<AppState>,
    payload: Result<Json<CoordinatesRequest>, JsonRejection>,
) -> Result<Json<ClosestLocations>, ApiError> {
    let Json(coordinates) = payload?;
    let origin = coordinates.require()?;
    info!(latitude = origin.latitude, longitude = origin.longitude, "🔎 Looking up closest safety locations");

    Ok(Json(closest_by_category(&state.locations, &origin)))
}

use crate::api::types::AppState;
use crate::domain::{Geofence, GeofenceType};
use axum::Json;
use axum::extract::State;

/// `GET /geofences` — a single safe zone around the last known location, or nothing before a complete location
/// was reported.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Geofence>> {
    let last_known_location = state.store.last_known_location().await;

    let geofences = last_known_location
        .as_geo_location()
        .map(|center| Geofence {
            name: state.geofence.name().to_string(),
            r#type: GeofenceType::Safe,
            coordinates: [center.latitude, center.longitude],
            radius: state.geofence.radius(),
        })
        .into_iter()
        .collect();

    Json(geofences)
}

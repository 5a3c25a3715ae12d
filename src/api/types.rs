use crate::api::error::ApiError;
use crate::app_config::{AppConfig, Geofence};
use crate::coordinate_deserializer;
use crate::domain::{GeoLocation, SafetyLocation};
use crate::store::Store;
use serde::Deserialize;
use std::sync::Arc;

/// Shared context for all routes. The dataset is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub locations: Arc<Vec<SafetyLocation>>,
    pub geofence: Geofence,
}

impl AppState {
    pub fn new(store: Arc<Store>, locations: Vec<SafetyLocation>, config: &AppConfig) -> Self {
        AppState {
            store,
            locations: Arc::new(locations),
            geofence: config.geofence().clone(),
        }
    }
}

/// Request body carrying a pair of coordinates, each of which may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct CoordinatesRequest {
    #[serde(default, deserialize_with = "coordinate_deserializer::latitude")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate_deserializer::longitude")]
    pub longitude: Option<f64>,
}

impl CoordinatesRequest {
    pub fn require(&self) -> Result<GeoLocation, ApiError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(GeoLocation::new(latitude, longitude)),
            _ => Err(ApiError::BadRequest("Latitude and longitude required".to_string())),
        }
    }
}

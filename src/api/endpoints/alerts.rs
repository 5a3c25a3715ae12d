use crate::api::error::ApiError;
use crate::api::types::AppState;
use crate::coordinate_deserializer;
use crate::domain::{Alert, AlertStatus};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Deserialize)]
pub struct SosRequest {
    #[serde(default, deserialize_with = "coordinate_deserializer::latitude")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate_deserializer::longitude")]
    longitude: Option<f64>,
    name: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SosResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub alert: Alert,
}

/// `POST /sos` — raises a new active alert.
#[instrument(skip_all)]
pub async fn raise(
    State(state): State<AppState>,
    payload: Result<Json<SosRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SosResponse>), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::BadRequest("Invalid data".to_string()))?;
    let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
        return Err(ApiError::BadRequest("Latitude and longitude required".to_string()));
    };

    let name = text(request.name).unwrap_or_else(|| ANONYMOUS.to_string());
    info!("🆘 SOS received from {} at ({}, {})", name, latitude, longitude);

    let alert = state.store.add_alert(Alert::new(name, latitude, longitude, &Local::now())).await;

    Ok((
        StatusCode::CREATED,
        Json(SosResponse {
            status: "success",
            message: "SOS alert received",
            alert,
        }),
    ))
}

/// `GET /alerts` — all alerts in creation order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.store.alerts().await)
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    id: Option<Value>,
    status: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub status: &'static str,
    pub alert: Alert,
}

/// `POST /alerts/update` — sets the status of an alert. Any status may follow any other.
#[instrument(skip_all)]
pub async fn update_status(
    State(state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::BadRequest("JSON body required".to_string()))?;

    let (Some(id), Some(status)) = (text(request.id), text(request.status)) else {
        return Err(ApiError::BadRequest("Both id and status are required".to_string()));
    };

    let status = status
        .parse::<AlertStatus>()
        .map_err(|_| ApiError::BadRequest("Invalid status".to_string()))?;

    let alert = state
        .store
        .update_alert_status(&id, status)
        .await
        .ok_or_else(|| ApiError::NotFound("Alert not found".to_string()))?;

    Ok(Json(UpdateStatusResponse { status: "success", alert }))
}

/// Reads any JSON value as text, so a number sent as a name or id is kept rather than rejecting the request. `null`
/// and blank strings count as missing.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

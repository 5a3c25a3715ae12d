use crate::api::error::ApiError;
use crate::api::types::{AppState, CoordinatesRequest};
use crate::domain::LastKnownLocation;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request, State};
use axum::http::{HeaderMap, header};
use axum::{Form, Json};
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub status: &'static str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// `POST /location` — overwrites the last known location with the coordinates from a JSON or form body.
#[instrument(skip_all)]
pub async fn update(State(state): State<AppState>, request: Request) -> Result<Json<LocationResponse>, ApiError> {
    let coordinates = read_coordinates(request).await?;
    info!(latitude = ?coordinates.latitude, longitude = ?coordinates.longitude, "📍 Received location");

    state
        .store
        .set_last_known_location(LastKnownLocation {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
        .await;

    Ok(Json(LocationResponse {
        status: "success",
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
    }))
}

/// A JSON body wins when it parses. An unreadable JSON body or an unsupported content type yields no coordinates,
/// while coordinates that are present but not numbers are rejected.
async fn read_coordinates(request: Request) -> Result<CoordinatesRequest, ApiError> {
    if is_json(request.headers()) {
        // `null` is as good as no body at all
        return match Json::<Option<CoordinatesRequest>>::from_request(request, &()).await {
            Ok(Json(coordinates)) => Ok(coordinates.unwrap_or_default()),
            Err(rejection @ JsonRejection::JsonDataError(_)) => Err(rejection.into()),
            Err(_) => Ok(CoordinatesRequest::default()),
        };
    }

    match Form::<CoordinatesRequest>::from_request(request, &()).await {
        Ok(Form(coordinates)) => Ok(coordinates),
        Err(rejection @ (FormRejection::FailedToDeserializeForm(_) | FormRejection::FailedToDeserializeFormBody(_))) => {
            Err(ApiError::BadRequest(rejection.body_text()))
        }
        Err(_) => Ok(CoordinatesRequest::default()),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

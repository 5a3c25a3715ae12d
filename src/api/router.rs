use crate::api::endpoints;
use crate::api::types::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Builds the router with every page and JSON endpoint, traced per request.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(endpoints::pages::home))
        .route("/home", get(endpoints::pages::home))
        .route("/admin", get(endpoints::pages::admin))
        .route("/tourist", get(endpoints::pages::tourist).post(endpoints::pages::tourist))
        .route("/health", get(endpoints::health::check))
        .route("/location", post(endpoints::location::update))
        .route("/nearest_locations", post(endpoints::nearest::top))
        .route("/nearest-locations", post(endpoints::nearest::closest))
        .route("/sos", post(endpoints::alerts::raise))
        .route("/alerts", get(endpoints::alerts::list))
        .route("/alerts/update", post(endpoints::alerts::update_status))
        .route("/geofences", get(endpoints::geofences::list))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

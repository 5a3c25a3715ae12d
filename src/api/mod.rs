//! HTTP surface of the service.
//!
//! `router()` returns a composable axum `Router` with every page and JSON endpoint. Handlers share an
//! [`AppState`] holding the store, the dataset and the geofence settings.

mod endpoints;
mod error;
mod router;
mod types;

pub use router::router;
pub use types::AppState;

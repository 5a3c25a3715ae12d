use crate::alert_listener::alert_listener;
use crate::api::AppState;
use crate::app_config::AppConfig;
use crate::dataset::load_locations_from;
use crate::store::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task;
use tracing::{info, warn};

mod alert_listener;
mod api;
mod app_config;
mod coordinate_deserializer;
mod dataset;
mod domain;
mod geo;
mod nearest;
mod store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.core().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let locations = load_locations_from(config.dataset().path()).await;
    info!("✅  Loaded {} safety location(s)", locations.len());

    let store = Arc::new(Store::new());
    let notifier_rx = store.notifier();

    task::spawn(async move {
        alert_listener(notifier_rx).await;
    });
    info!("✅  Initialized alert listener");

    let app = api::router(AppState::new(store, locations, &config));
    let listener = TcpListener::bind(config.server().address()).await?;
    info!("🔥 {} is up and running on http://{}", env!("CARGO_PKG_NAME"), listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Received Ctrl-C, shutting down..."),
        Err(err) => {
            warn!("⚠️ Unable to listen for the shutdown signal: {}", err);
            std::future::pending::<()>().await
        }
    }
}

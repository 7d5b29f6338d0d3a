//! Fuel Server - plans fuel stops along routes against a loaded price list

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuel_core::StationCatalog;
use fuel_server::api;
use fuel_server::config::Config;
use fuel_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fuel_server=debug".parse()?)
                .add_directive("fuel_core=info".parse()?),
        )
        .init();

    tracing::info!("Starting Fuel Server...");

    let config = Config::from_env();
    config
        .planner
        .validate()
        .context("invalid default vehicle parameters")?;

    // Load once; every request shares the catalog read-only.
    let stations_path = config.stations_path.clone();
    let catalog = tokio::task::spawn_blocking(move || {
        StationCatalog::from_csv_path(&stations_path, None)
    })
    .await?
    .with_context(|| format!("failed to load stations from {}", config.stations_path))?;

    let port = config.server_port;
    let state = Arc::new(AppState::new(catalog, config));

    let app = api::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

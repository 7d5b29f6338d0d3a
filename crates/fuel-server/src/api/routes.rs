//! REST API routes.

use axum::{extract::State, middleware, routing::{get, post}, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::api::{plan, request_id};
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/stations", get(station_stats))
        .route("/v1/fuel/plan", post(plan::plan_fuel_stops))
        .layer(middleware::from_fn(request_id::ensure_request_id))
}

#[derive(Debug, Serialize)]
pub struct StationStats {
    pub stations: usize,
    pub dropped_rows: usize,
}

async fn station_stats(State(state): State<Arc<AppState>>) -> Json<StationStats> {
    let catalog = state.catalog();
    Json(StationStats {
        stations: catalog.len(),
        dropped_rows: catalog.dropped_rows(),
    })
}

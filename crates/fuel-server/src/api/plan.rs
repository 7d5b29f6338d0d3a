//! Fuel plan endpoint.
//!
//! Accepts an already-resolved route, either as raw `[lat, lon]` pairs or as
//! the encoded polyline a routing provider returns, and plans stops against
//! the shared station catalog.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use fuel_core::{
    decode_polyline, FuelStopPlanner, PlanResult, PlannerConfig, RouteBuffer, RoutePoint,
    RouteSummary, StopResult,
};

use crate::api::request_id::RequestId;
use crate::state::AppState;

type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Default, Deserialize)]
pub struct FuelPlanRequest {
    /// Route vertices as `[lat, lon]`.
    #[serde(default)]
    pub route: Option<Vec<[f64; 2]>>,
    /// Encoded polyline, precision 5.
    #[serde(default)]
    pub geometry: Option<String>,
    pub range_miles: Option<f64>,
    pub mpg: Option<f64>,
    pub search_radius_miles: Option<f64>,
    /// Corridor half-width in degrees. Zero searches the whole catalog.
    pub corridor_buffer_deg: Option<f64>,
    /// Provider trip summary, echoed back in display units.
    pub distance_m: Option<f64>,
    pub duration_s: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FuelPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_summary: Option<RouteSummary>,
    pub route_points: usize,
    pub checkpoint_count: usize,
    pub total_fuel_cost: f64,
    pub fuel_stops: Vec<StopResult>,
}

/// Errors carry the request id so callers can match them to server logs.
pub async fn plan_fuel_stops(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(req): Json<FuelPlanRequest>,
) -> Result<Json<FuelPlanResponse>, ApiError> {
    plan(state, req).await.map_err(|(status, Json(mut body))| {
        if status.is_server_error() {
            tracing::error!(%request_id, "Fuel plan failed");
        }
        body["request_id"] = json!(request_id.to_string());
        (status, Json(body))
    })
}

async fn plan(
    state: Arc<AppState>,
    req: FuelPlanRequest,
) -> Result<Json<FuelPlanResponse>, ApiError> {
    let route = resolve_route(&req)?;
    let defaults = state.config().planner;
    let config = PlannerConfig {
        range_miles: req.range_miles.unwrap_or(defaults.range_miles),
        mpg: req.mpg.unwrap_or(defaults.mpg),
        search_radius_miles: req.search_radius_miles.unwrap_or(defaults.search_radius_miles),
    };
    let planner = FuelStopPlanner::new(config)
        .map_err(|err| bad_request("Invalid vehicle parameters", err.to_string()))?;

    let buffer_deg = req
        .corridor_buffer_deg
        .unwrap_or(state.config().corridor_buffer_deg);
    if !buffer_deg.is_finite() || buffer_deg < 0.0 {
        return Err(bad_request(
            "Invalid corridor buffer",
            format!("corridor_buffer_deg must be a non-negative number, got {buffer_deg}"),
        ));
    }

    let route_summary = match (req.distance_m, req.duration_s) {
        (Some(distance_m), Some(duration_s)) => {
            Some(RouteSummary::from_meters_seconds(distance_m, duration_s))
        }
        _ => None,
    };

    let catalog = state.catalog();
    let route_points = route.len();
    let result = tokio::task::spawn_blocking(move || -> Result<PlanResult, fuel_core::PlanError> {
        if buffer_deg > 0.0 {
            let corridor = RouteBuffer::new(&route, buffer_deg);
            planner.plan_in_corridor(&route, &catalog, &corridor)
        } else {
            planner.plan(&route, &catalog)
        }
    })
    .await
    .map_err(|err| {
        tracing::error!("Planning task failed: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to plan fuel stops" })),
        )
    })?;
    let plan = result.map_err(|err| bad_request("Invalid vehicle parameters", err.to_string()))?;

    Ok(Json(FuelPlanResponse {
        route_summary,
        route_points,
        checkpoint_count: plan.checkpoint_count,
        total_fuel_cost: plan.total_cost,
        fuel_stops: plan.stops,
    }))
}

fn resolve_route(req: &FuelPlanRequest) -> Result<Vec<RoutePoint>, ApiError> {
    let route: Vec<RoutePoint> = match (&req.route, &req.geometry) {
        (Some(points), None) => points.iter().copied().map(RoutePoint::from).collect(),
        (None, Some(geometry)) => decode_polyline(geometry)
            .map_err(|err| bad_request("Invalid route geometry", err.to_string()))?,
        (Some(_), Some(_)) => {
            return Err(bad_request(
                "Ambiguous route",
                "provide either route or geometry, not both",
            ))
        }
        (None, None) => {
            return Err(bad_request(
                "Missing route",
                "provide route as [lat, lon] pairs or an encoded geometry",
            ))
        }
    };

    if let Some(point) = route.iter().find(|p| {
        !(p.lat.is_finite() && p.lon.is_finite())
            || !(-90.0..=90.0).contains(&p.lat)
            || !(-180.0..=180.0).contains(&p.lon)
    }) {
        return Err(bad_request(
            "Route coordinate out of range",
            format!(
                "lat must be within [-90, 90], lon within [-180, 180]; got [{}, {}]",
                point.lat, point.lon
            ),
        ));
    }

    Ok(route)
}

fn bad_request(error: &str, details: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": error,
            "details": details.into(),
        })),
    )
}

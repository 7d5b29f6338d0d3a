use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use fuel_core::{RawStationRecord, StationCatalog};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> axum::Router {
    let catalog = StationCatalog::load(
        vec![
            RawStationRecord::new("NEAR THREE", "40.05", "-74.00", "3.00"),
            RawStationRecord::new("NEAR TWO FIFTY", "39.95", "-74.05", "2.50"),
            RawStationRecord::new("FAR TWO EIGHTY", "40.60", "-74.00", "2.80"),
            RawStationRecord::new("OFF CORRIDOR", "40.20", "-73.00", "1.00"),
            RawStationRecord::new("ON CORRIDOR", "40.02", "-73.02", "3.10"),
            RawStationRecord::new("BROKEN", "", "-73.00", "0.50"),
        ],
        None,
    );
    let state = Arc::new(AppState::new(catalog, Config::default()));
    api::routes().with_state(state)
}

fn post_plan(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/fuel/plan")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn health_check() {
    let app = setup_app();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn station_stats_report_dropped_rows() {
    let app = setup_app();
    let req = Request::builder().uri("/v1/stations").body(Body::empty()).unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["stations"], 5);
    assert_eq!(body["dropped_rows"], 1);
}

#[tokio::test]
async fn plans_stops_within_route_corridor() {
    let app = setup_app();
    let res = app
        .oneshot(post_plan(json!({
            "route": [[40.0, -75.0], [40.0, -74.0], [40.0, -73.0]],
            "range_miles": 40.0,
            "distance_m": 170_000.0,
            "duration_s": 7_200.0
        })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["checkpoint_count"], 2);
    assert_eq!(body["route_points"], 3);
    let stops = body["fuel_stops"].as_array().unwrap();
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0]["station_name"], "NEAR TWO FIFTY");
    assert_eq!(stops[0]["gallons"], 4.0);
    assert_eq!(stops[0]["cost"], 10.0);
    assert_eq!(stops[1]["station_name"], "ON CORRIDOR");
    assert_eq!(body["total_fuel_cost"], 22.4);
    assert_eq!(body["route_summary"]["total_duration_hours"], 2.0);
}

#[tokio::test]
async fn zero_buffer_searches_whole_catalog() {
    let app = setup_app();
    let res = app
        .oneshot(post_plan(json!({
            "route": [[40.0, -75.0], [40.0, -74.0], [40.0, -73.0]],
            "range_miles": 40.0,
            "corridor_buffer_deg": 0.0
        })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["fuel_stops"][1]["station_name"], "OFF CORRIDOR");
    assert!(body.get("route_summary").is_none());
}

#[tokio::test]
async fn accepts_encoded_geometry() {
    let app = setup_app();
    let res = app
        .oneshot(post_plan(json!({
            "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
            "range_miles": 100.0
        })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["route_points"], 3);
    assert_eq!(body["checkpoint_count"], 2);
    assert_eq!(body["fuel_stops"].as_array().unwrap().len(), 0);
    assert_eq!(body["total_fuel_cost"], 0.0);
}

#[tokio::test]
async fn empty_route_is_empty_plan() {
    let app = setup_app();
    let res = app.oneshot(post_plan(json!({ "route": [] }))).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["checkpoint_count"], 0);
    assert_eq!(body["total_fuel_cost"], 0.0);
}

#[tokio::test]
async fn rejects_invalid_requests() {
    let cases = [
        json!({ "route": [[40.0, -75.0], [40.0, -74.0]], "mpg": 0.0 }),
        json!({ "route": [[40.0, -75.0], [40.0, -74.0]], "range_miles": -1.0 }),
        json!({ "route": [[40.0, -75.0], [40.0, -74.0]], "search_radius_miles": 0.0 }),
        json!({ "route": [[40.0, -75.0], [40.0, -74.0]], "corridor_buffer_deg": -0.1 }),
        json!({ "route": [[95.0, -75.0], [40.0, -74.0]] }),
        json!({ "geometry": "_p~iF" }),
        json!({ "geometry": format!("}}{}F?", "~".repeat(11)).repeat(3) }),
        json!({ "route": [[40.0, -75.0]], "geometry": "_p~iF~ps|U" }),
        json!({}),
    ];

    for case in cases {
        let app = setup_app();
        let res = app.oneshot(post_plan(case.clone())).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "case {case}");
        let body = read_json(res).await;
        assert!(body["error"].is_string(), "case {case}");
        assert!(body["details"].is_string(), "case {case}");
    }
}

#[tokio::test]
async fn errors_echo_request_id() {
    let app = setup_app();
    let mut req = post_plan(json!({ "route": [[40.0, -75.0], [40.0, -74.0]], "mpg": 0.0 }));
    req.headers_mut()
        .insert("x-request-id", "plan-42".parse().unwrap());
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.headers()["x-request-id"], "plan-42");

    let body = read_json(res).await;
    assert_eq!(body["request_id"], "plan-42");
}

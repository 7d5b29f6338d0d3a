//! Route file formats accepted by the CLI.

use anyhow::{bail, Context, Result};
use fuel_core::{decode_polyline, RoutePoint, RouteSummary};
use serde::Deserialize;

/// A route on disk, in any of three shapes:
///
/// - a bare JSON array of `[lat, lon]` pairs,
/// - `{"geometry": "<encoded polyline>"}`,
/// - a saved directions response with `routes[0].geometry` and
///   `routes[0].summary.{distance, duration}` in meters and seconds.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RouteFile {
    Points(Vec<[f64; 2]>),
    Encoded { geometry: String },
    Directions { routes: Vec<DirectionsRoute> },
}

#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    pub geometry: String,
    #[serde(default)]
    pub summary: Option<DirectionsSummary>,
}

#[derive(Debug, Deserialize)]
pub struct DirectionsSummary {
    pub distance: f64,
    pub duration: f64,
}

/// Parse route file contents into points plus an optional trip summary.
pub fn parse_route(text: &str) -> Result<(Vec<RoutePoint>, Option<RouteSummary>)> {
    let file: RouteFile = serde_json::from_str(text).context("unrecognized route file")?;

    let (route, summary) = match file {
        RouteFile::Points(points) => (points.into_iter().map(RoutePoint::from).collect(), None),
        RouteFile::Encoded { geometry } => (decode_polyline(&geometry)?, None),
        RouteFile::Directions { routes } => {
            let Some(route) = routes.into_iter().next() else {
                bail!("directions response contains no routes");
            };
            let summary = route
                .summary
                .map(|s| RouteSummary::from_meters_seconds(s.distance, s.duration));
            (decode_polyline(&route.geometry)?, summary)
        }
    };

    check_coordinates(&route)?;
    Ok((route, summary))
}

fn check_coordinates(route: &[RoutePoint]) -> Result<()> {
    for (index, point) in route.iter().enumerate() {
        let valid = point.lat.is_finite()
            && point.lon.is_finite()
            && (-90.0..=90.0).contains(&point.lat)
            && (-180.0..=180.0).contains(&point.lon);
        if !valid {
            bail!(
                "route point {index} out of range: lat must be within [-90, 90], lon within [-180, 180]; got [{}, {}]",
                point.lat,
                point.lon
            );
        }
    }
    Ok(())
}

/// Corridor half-width in degrees, or `None` to search every station.
pub fn corridor_width(buffer_deg: f64) -> Result<Option<f64>> {
    if !buffer_deg.is_finite() || buffer_deg < 0.0 {
        bail!("corridor buffer must be a non-negative number of degrees, got {buffer_deg}");
    }
    Ok((buffer_deg > 0.0).then_some(buffer_deg))
}

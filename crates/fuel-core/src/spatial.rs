//! Spatial math for distance calculations and corridor containment.

use crate::models::RoutePoint;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MI: f64 = 3_958.8;

/// Coarse conversion used by the bounding-box pre-filter.
///
/// A degree of latitude is slightly more than 69 miles everywhere, so dividing
/// by this figure never under-sizes a latitude buffer.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// Buffer width the route corridor uses when none is configured.
pub const DEFAULT_CORRIDOR_BUFFER_DEG: f64 = 0.1;

/// Great-circle distance between two points in miles (Haversine formula).
pub fn haversine_miles(a: RoutePoint, b: RoutePoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MI * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Absolute longitude difference in degrees, wrapped across the antimeridian.
pub fn longitude_delta(lon1: f64, lon2: f64) -> f64 {
    let delta = (lon2 - lon1).rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// A region used to prune the station catalog before searching.
///
/// The engine only asks whether a point lies inside; how the region was built
/// is the caller's business.
pub trait Corridor {
    fn contains(&self, lat: f64, lon: f64) -> bool;
}

/// A closed polygon ring of `(lat, lon)` vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct CorridorPolygon {
    vertices: Vec<RoutePoint>,
}

impl CorridorPolygon {
    pub fn new(vertices: Vec<RoutePoint>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[RoutePoint] {
        &self.vertices
    }
}

impl Corridor for CorridorPolygon {
    /// Ray casting: count crossings of a ray heading east from the point.
    fn contains(&self, lat: f64, lon: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (yi, xi) = (self.vertices[i].lat, self.vertices[i].lon);
            let (yj, xj) = (self.vertices[j].lat, self.vertices[j].lon);

            if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

/// The set of points within a fixed number of degrees of a route polyline.
///
/// Distances are planar in `(lon, lat)` degree space, which is how a buffered
/// line string is built from raw route coordinates. Round caps at both ends
/// and at every vertex fall out of the point-to-segment distance.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBuffer {
    route: Vec<RoutePoint>,
    width_deg: f64,
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl RouteBuffer {
    pub fn new(route: &[RoutePoint], width_deg: f64) -> Self {
        let width_deg = width_deg.max(0.0);
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for point in route {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lon = min_lon.min(point.lon);
            max_lon = max_lon.max(point.lon);
        }

        Self {
            route: route.to_vec(),
            width_deg,
            min_lat: min_lat - width_deg,
            max_lat: max_lat + width_deg,
            min_lon: min_lon - width_deg,
            max_lon: max_lon + width_deg,
        }
    }

    pub fn width_deg(&self) -> f64 {
        self.width_deg
    }
}

impl Corridor for RouteBuffer {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        if lat < self.min_lat || lat > self.max_lat || lon < self.min_lon || lon > self.max_lon {
            return false;
        }

        match self.route.as_slice() {
            [] => false,
            [only] => planar_distance(lon, lat, only.lon, only.lat) <= self.width_deg,
            route => route.windows(2).any(|pair| {
                distance_to_segment_deg(lat, lon, pair[0], pair[1]) <= self.width_deg
            }),
        }
    }
}

fn planar_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Planar distance in degrees from a point to the segment `start..end`.
fn distance_to_segment_deg(lat: f64, lon: f64, start: RoutePoint, end: RoutePoint) -> f64 {
    let px = lon - start.lon;
    let py = lat - start.lat;
    let sx = end.lon - start.lon;
    let sy = end.lat - start.lat;

    let seg_len_sq = sx * sx + sy * sy;
    if seg_len_sq <= f64::EPSILON {
        return (px * px + py * py).sqrt();
    }

    // Project point onto segment line: t = ((P-A) · (B-A)) / |B-A|²
    let t = ((px * sx + py * sy) / seg_len_sq).clamp(0.0, 1.0);
    let dx = px - t * sx;
    let dy = py - t * sy;
    (dx * dx + dy * dy).sqrt()
}

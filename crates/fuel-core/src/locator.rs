//! Cheapest-station lookup around a checkpoint.
//!
//! Two phases: a cheap bounding box in degrees discards most of the catalog,
//! then the exact great-circle distance decides what is in range. The box must
//! stay conservative, so it may only ever over-include.

use crate::models::{FuelStation, RoutePoint};
use crate::spatial::{haversine_miles, longitude_delta, MILES_PER_DEGREE};

/// Angular half-widths of the coarse search box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoarseBuffer {
    pub lat_deg: f64,
    /// `None` when the search circle reaches a pole and every longitude is in
    /// play.
    pub lon_deg: Option<f64>,
}

impl CoarseBuffer {
    pub fn admits(&self, center: RoutePoint, lat: f64, lon: f64) -> bool {
        if (lat - center.lat).abs() > self.lat_deg {
            return false;
        }
        match self.lon_deg {
            Some(lon_deg) => longitude_delta(center.lon, lon) <= lon_deg,
            None => true,
        }
    }
}

/// Size the coarse box for a search of `radius_miles` around `center`.
///
/// Latitude uses the flat 69 miles-per-degree figure. Longitude degrees shrink
/// towards the poles, so the longitude half-width is the true longitudinal
/// extent of a circle of that angular radius at the center's latitude.
pub fn coarse_buffer(center: RoutePoint, radius_miles: f64) -> CoarseBuffer {
    let lat_deg = radius_miles / MILES_PER_DEGREE;

    if center.lat.abs() + lat_deg >= 90.0 {
        return CoarseBuffer {
            lat_deg,
            lon_deg: None,
        };
    }

    let ratio = lat_deg.to_radians().sin() / center.lat.to_radians().cos();
    let lon_deg = if ratio >= 1.0 {
        None
    } else {
        Some(ratio.asin().to_degrees().max(lat_deg))
    };

    CoarseBuffer { lat_deg, lon_deg }
}

/// Find the cheapest station within `radius_miles` of `point`.
///
/// Price ties go to the station that appears first in `stations`. Returns
/// `None` when nothing is in range.
pub fn find_cheapest_within(
    point: RoutePoint,
    stations: &[FuelStation],
    radius_miles: f64,
) -> Option<&FuelStation> {
    let buffer = coarse_buffer(point, radius_miles);

    let mut best: Option<&FuelStation> = None;
    for station in stations
        .iter()
        .filter(|s| buffer.admits(point, s.latitude, s.longitude))
    {
        if haversine_miles(point, station.location()) > radius_miles {
            continue;
        }
        // Strict comparison keeps the earliest of equally priced stations.
        if best.map_or(true, |b| station.price_per_gallon < b.price_per_gallon) {
            best = Some(station);
        }
    }

    best
}

//! Core data models for fuel stop planning.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
}

impl RoutePoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for RoutePoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for RoutePoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

/// A fuel station with a known retail price.
///
/// Stations are created once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_gallon: f64,
}

impl FuelStation {
    /// Parse a raw price list row.
    ///
    /// Returns `None` for any row missing a name, carrying non-numeric or
    /// out-of-range coordinates, or a price that is not strictly positive.
    pub fn from_raw(raw: &RawStationRecord) -> Option<Self> {
        let name = raw.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }

        let latitude = parse_number(raw.latitude.as_deref())?;
        let longitude = parse_number(raw.longitude.as_deref())?;
        let price_per_gallon = parse_number(raw.price.as_deref())?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        if price_per_gallon <= 0.0 {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            latitude,
            longitude,
            price_per_gallon,
        })
    }

    pub fn location(&self) -> RoutePoint {
        RoutePoint::new(self.latitude, self.longitude)
    }
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    let parsed: f64 = value?.trim().trim_start_matches('$').parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// One unparsed row of a station price list.
///
/// Every field is optional text so a dirty row still deserializes; the
/// numeric checks happen in [`FuelStation::from_raw`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStationRecord {
    #[serde(default, alias = "Truckstop Name", alias = "station_name")]
    pub name: Option<String>,
    #[serde(default, alias = "Latitude", alias = "lat")]
    pub latitude: Option<String>,
    #[serde(default, alias = "Longitude", alias = "lon", alias = "lng")]
    pub longitude: Option<String>,
    #[serde(default, alias = "Retail Price", alias = "price_per_gallon")]
    pub price: Option<String>,
}

impl RawStationRecord {
    pub fn new(name: &str, latitude: &str, longitude: &str, price: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            latitude: Some(latitude.to_string()),
            longitude: Some(longitude.to_string()),
            price: Some(price.to_string()),
        }
    }
}

/// A route vertex at which a refueling stop is planned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub point: RoutePoint,
    /// Index of the vertex in the input route.
    pub route_index: usize,
    /// Distance accumulated since the previous checkpoint (or route start).
    pub leg_miles: f64,
}

/// A planned refueling stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopResult {
    pub station_name: String,
    pub location: RoutePoint,
    pub price_per_gallon: f64,
    pub gallons: f64,
    pub cost: f64,
}

/// Output of a planning call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanResult {
    /// Stops in route order. Checkpoints without a nearby station are absent.
    pub stops: Vec<StopResult>,
    pub total_cost: f64,
    /// Number of checkpoints the route produced.
    pub checkpoint_count: usize,
}

impl PlanResult {
    /// Checkpoints for which no station was found.
    pub fn unserved_checkpoints(&self) -> usize {
        self.checkpoint_count.saturating_sub(self.stops.len())
    }
}

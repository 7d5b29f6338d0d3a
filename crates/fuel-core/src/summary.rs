//! Unit conversions for a routing provider's trip summary.

use serde::{Deserialize, Serialize};

use crate::planner::round_cents;

pub const MILES_PER_KM: f64 = 0.621371;

/// Trip distance and duration in display units, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub total_distance_miles: f64,
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    pub total_duration_hours: f64,
}

impl RouteSummary {
    /// Convert provider units (meters, seconds).
    pub fn from_meters_seconds(distance_m: f64, duration_s: f64) -> Self {
        let km = distance_m / 1000.0;
        let minutes = duration_s / 60.0;
        Self {
            total_distance_miles: round_cents(km * MILES_PER_KM),
            total_distance_km: round_cents(km),
            total_duration_minutes: round_cents(minutes),
            total_duration_hours: round_cents(minutes / 60.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_provider_units() {
        let summary = RouteSummary::from_meters_seconds(160_934.0, 5_400.0);
        assert_eq!(summary.total_distance_km, 160.93);
        assert_eq!(summary.total_distance_miles, 100.0);
        assert_eq!(summary.total_duration_minutes, 90.0);
        assert_eq!(summary.total_duration_hours, 1.5);
    }
}

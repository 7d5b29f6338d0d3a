//! Fuel stop planning along a route.
//!
//! The planner is greedy per checkpoint: each checkpoint takes the cheapest
//! station within the search radius, independently of the others. It does not
//! backtrack or widen the radius when a checkpoint has nothing in range.

use serde::{Deserialize, Serialize};

use crate::catalog::StationCatalog;
use crate::error::PlanError;
use crate::locator::find_cheapest_within;
use crate::models::{PlanResult, RoutePoint, StopResult};
use crate::segmenter::segment_route;
use crate::spatial::Corridor;

/// Vehicle and search parameters for a planning call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Distance the vehicle covers on a full tank.
    pub range_miles: f64,
    /// Constant fuel economy.
    pub mpg: f64,
    /// How far from a checkpoint a station may be.
    pub search_radius_miles: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            range_miles: 500.0,
            mpg: 10.0,
            search_radius_miles: 25.0,
        }
    }
}

impl PlannerConfig {
    pub fn new(range_miles: f64, mpg: f64, search_radius_miles: f64) -> Self {
        Self {
            range_miles,
            mpg,
            search_radius_miles,
        }
    }

    /// Reject parameters that would produce infinite, zero or NaN results.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !is_positive(self.range_miles) {
            return Err(PlanError::InvalidRange(self.range_miles));
        }
        if !is_positive(self.mpg) {
            return Err(PlanError::InvalidMpg(self.mpg));
        }
        if !is_positive(self.search_radius_miles) {
            return Err(PlanError::InvalidSearchRadius(self.search_radius_miles));
        }
        Ok(())
    }

    /// Fuel bought at every stop: a full range's worth.
    pub fn gallons_per_stop(&self) -> f64 {
        self.range_miles / self.mpg
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Round to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Plans fuel stops with a validated configuration.
///
/// Holds no per-call state, so one planner can serve concurrent calls against
/// a shared catalog.
#[derive(Debug, Clone)]
pub struct FuelStopPlanner {
    config: PlannerConfig,
}

impl FuelStopPlanner {
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan stops along `route` using every station in `catalog`.
    pub fn plan(&self, route: &[RoutePoint], catalog: &StationCatalog) -> Result<PlanResult, PlanError> {
        let checkpoints = segment_route(route, self.config.range_miles)?;
        let gallons = self.config.gallons_per_stop();

        let mut stops = Vec::with_capacity(checkpoints.len());
        let mut total_cost = 0.0;

        for checkpoint in &checkpoints {
            let Some(station) = find_cheapest_within(
                checkpoint.point,
                catalog.stations(),
                self.config.search_radius_miles,
            ) else {
                tracing::warn!(
                    lat = checkpoint.point.lat,
                    lon = checkpoint.point.lon,
                    route_index = checkpoint.route_index,
                    radius_miles = self.config.search_radius_miles,
                    "No fuel station in range of checkpoint"
                );
                continue;
            };

            let cost = round_cents(station.price_per_gallon * gallons);
            total_cost += cost;
            stops.push(StopResult {
                station_name: station.name.clone(),
                location: station.location(),
                price_per_gallon: station.price_per_gallon,
                gallons: round_cents(gallons),
                cost,
            });
        }

        let plan = PlanResult {
            total_cost: round_cents(total_cost),
            checkpoint_count: checkpoints.len(),
            stops,
        };
        tracing::info!(
            route_points = route.len(),
            checkpoints = plan.checkpoint_count,
            stops = plan.stops.len(),
            total_cost = plan.total_cost,
            "Planned fuel stops"
        );
        Ok(plan)
    }

    /// Plan stops using only the stations of `catalog` inside `corridor`.
    pub fn plan_in_corridor(
        &self,
        route: &[RoutePoint],
        catalog: &StationCatalog,
        corridor: &dyn Corridor,
    ) -> Result<PlanResult, PlanError> {
        let nearby = catalog.filter_to(corridor);
        tracing::debug!(
            catalog = catalog.len(),
            in_corridor = nearby.len(),
            "Filtered stations to route corridor"
        );
        self.plan(route, &nearby)
    }
}

/// One-shot planning with explicit parameters.
pub fn plan_stops(
    route: &[RoutePoint],
    catalog: &StationCatalog,
    range_miles: f64,
    mpg: f64,
    search_radius_miles: f64,
) -> Result<PlanResult, PlanError> {
    FuelStopPlanner::new(PlannerConfig::new(range_miles, mpg, search_radius_miles))?.plan(route, catalog)
}

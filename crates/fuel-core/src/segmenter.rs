//! Route segmentation into refueling checkpoints.

use crate::error::PlanError;
use crate::models::{Checkpoint, RoutePoint};
use crate::spatial::haversine_miles;

/// Walk `route` and emit a checkpoint each time the distance driven since the
/// last checkpoint reaches `range_miles`.
///
/// Checkpoints snap to the route vertex that first crosses the threshold and
/// the accumulator restarts from zero there, so any overshoot is discarded.
/// Spacing therefore depends on vertex density, not only on route length.
pub fn segment_route(route: &[RoutePoint], range_miles: f64) -> Result<Vec<Checkpoint>, PlanError> {
    if !range_miles.is_finite() || range_miles <= 0.0 {
        return Err(PlanError::InvalidRange(range_miles));
    }

    let mut checkpoints = Vec::new();
    let mut accumulated = 0.0;

    for (index, pair) in route.windows(2).enumerate() {
        accumulated += haversine_miles(pair[0], pair[1]);
        if accumulated >= range_miles {
            checkpoints.push(Checkpoint {
                point: pair[1],
                route_index: index + 1,
                leg_miles: accumulated,
            });
            accumulated = 0.0;
        }
    }

    Ok(checkpoints)
}

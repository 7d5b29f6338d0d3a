pub mod catalog;
pub mod error;
pub mod locator;
pub mod models;
pub mod planner;
pub mod polyline;
pub mod segmenter;
pub mod spatial;
pub mod summary;

pub use catalog::StationCatalog;
pub use error::{CatalogError, PlanError, PolylineError};
pub use locator::{coarse_buffer, find_cheapest_within, CoarseBuffer};
pub use models::{Checkpoint, FuelStation, PlanResult, RawStationRecord, RoutePoint, StopResult};
pub use planner::{plan_stops, FuelStopPlanner, PlannerConfig};
pub use polyline::decode_polyline;
pub use segmenter::segment_route;
pub use spatial::{haversine_miles, Corridor, CorridorPolygon, RouteBuffer};
pub use summary::RouteSummary;

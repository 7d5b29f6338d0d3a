//! Fuel CLI - command line tools for the fuel stop planner.
//!
//! - fuel-plan: plan stops for a route file against a CSV price list

pub mod route_file;

pub use route_file::{corridor_width, parse_route, RouteFile};

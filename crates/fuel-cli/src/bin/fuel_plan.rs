use anyhow::{Context, Result};
use clap::Parser;
use fuel_core::spatial::DEFAULT_CORRIDOR_BUFFER_DEG;
use fuel_core::{FuelStopPlanner, PlannerConfig, RouteBuffer, StationCatalog};
use fuel_cli::{corridor_width, parse_route};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan fuel stops along a route", long_about = None)]
struct Args {
    /// CSV price list with name, latitude, longitude and price columns
    #[arg(long)]
    stations: PathBuf,

    /// Route file: [[lat, lon], ...], {"geometry": "..."} or a saved directions response
    #[arg(long)]
    route: PathBuf,

    /// Miles on a full tank
    #[arg(long, default_value_t = 500.0)]
    range_miles: f64,

    /// Fuel economy in miles per gallon
    #[arg(long, default_value_t = 10.0)]
    mpg: f64,

    /// Maximum distance from a checkpoint to a station, in miles
    #[arg(long, default_value_t = 25.0)]
    search_radius_miles: f64,

    /// Corridor half-width around the route in degrees (0 searches every station)
    #[arg(long, default_value_t = DEFAULT_CORRIDOR_BUFFER_DEG)]
    corridor_buffer_deg: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let planner = FuelStopPlanner::new(PlannerConfig::new(
        args.range_miles,
        args.mpg,
        args.search_radius_miles,
    ))?;

    let text = std::fs::read_to_string(&args.route)
        .with_context(|| format!("failed to read route file {}", args.route.display()))?;
    let (route, summary) = parse_route(&text)?;
    tracing::debug!(points = route.len(), "Parsed route file");

    let plan = if let Some(width) = corridor_width(args.corridor_buffer_deg)? {
        let corridor = RouteBuffer::new(&route, width);
        let catalog = StationCatalog::from_csv_path(&args.stations, Some(&corridor))?;
        planner.plan(&route, &catalog)?
    } else {
        let catalog = StationCatalog::from_csv_path(&args.stations, None)?;
        planner.plan(&route, &catalog)?
    };

    if plan.unserved_checkpoints() > 0 {
        eprintln!(
            "Warning: {} of {} checkpoints have no station within {} miles",
            plan.unserved_checkpoints(),
            plan.checkpoint_count,
            args.search_radius_miles
        );
    }

    let output = json!({
        "route_summary": summary,
        "route_points": route.len(),
        "checkpoint_count": plan.checkpoint_count,
        "total_fuel_cost": plan.total_cost,
        "fuel_stops": plan.stops,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

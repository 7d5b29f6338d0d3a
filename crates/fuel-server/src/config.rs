//! Server configuration from environment.

use std::env;
use std::str::FromStr;

use fuel_core::spatial::DEFAULT_CORRIDOR_BUFFER_DEG;
use fuel_core::PlannerConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// CSV price list loaded once at startup.
    pub stations_path: String,
    /// Defaults for requests that omit vehicle parameters.
    pub planner: PlannerConfig,
    /// Half-width in degrees of the corridor built around each route.
    /// Zero searches the whole catalog.
    pub corridor_buffer_deg: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            stations_path: "data/fuel-prices.csv".to_string(),
            planner: PlannerConfig::default(),
            corridor_buffer_deg: DEFAULT_CORRIDOR_BUFFER_DEG,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("FUEL_PORT", defaults.server_port),
            stations_path: env::var("FUEL_STATIONS_PATH").unwrap_or(defaults.stations_path),
            planner: PlannerConfig {
                range_miles: env_or("FUEL_RANGE_MILES", defaults.planner.range_miles),
                mpg: env_or("FUEL_MPG", defaults.planner.mpg),
                search_radius_miles: env_or(
                    "FUEL_SEARCH_RADIUS_MILES",
                    defaults.planner.search_radius_miles,
                ),
            },
            corridor_buffer_deg: env_or("FUEL_CORRIDOR_BUFFER_DEG", defaults.corridor_buffer_deg),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_vehicle_profile() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.planner, PlannerConfig::default());
        assert_eq!(config.corridor_buffer_deg, 0.1);
    }

    #[test]
    fn env_or_falls_back_on_garbage() {
        assert_eq!(env_or("FUEL_TEST_UNSET_VARIABLE", 7u16), 7);
    }
}

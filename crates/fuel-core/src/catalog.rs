//! Station catalog loading and corridor filtering.
//!
//! The catalog is best-effort: a price list is large and dirty, so rows that
//! fail to parse are counted and skipped rather than failing the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::models::{FuelStation, RawStationRecord};
use crate::spatial::Corridor;

/// An immutable, ordered set of priced fuel stations.
///
/// Iteration order is source row order and decides price ties.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    stations: Vec<FuelStation>,
    dropped_rows: usize,
}

impl StationCatalog {
    /// Build a catalog from raw rows, optionally keeping only stations inside
    /// `corridor`.
    pub fn load<I>(records: I, corridor: Option<&dyn Corridor>) -> Self
    where
        I: IntoIterator<Item = RawStationRecord>,
    {
        let mut stations = Vec::new();
        let mut dropped_rows = 0usize;

        for raw in records {
            let Some(station) = FuelStation::from_raw(&raw) else {
                tracing::debug!(row = ?raw, "Dropping malformed station row");
                dropped_rows += 1;
                continue;
            };
            if corridor.is_some_and(|c| !c.contains(station.latitude, station.longitude)) {
                continue;
            }
            stations.push(station);
        }

        Self {
            stations,
            dropped_rows,
        }
    }

    /// Read a CSV price list with a header row.
    ///
    /// Rows that do not deserialize are treated like malformed rows. Only a
    /// missing or unreadable header fails the load.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        corridor: Option<&dyn Corridor>,
    ) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        rdr.headers()?;

        let mut unreadable = 0usize;
        let records: Vec<RawStationRecord> = rdr
            .deserialize::<RawStationRecord>()
            .filter_map(|result| match result {
                Ok(raw) => Some(raw),
                Err(err) => {
                    tracing::debug!(error = %err, "Skipping unreadable price list row");
                    unreadable += 1;
                    None
                }
            })
            .collect();

        let mut catalog = Self::load(records, corridor);
        catalog.dropped_rows += unreadable;
        Ok(catalog)
    }

    /// Open and read a CSV price list from disk.
    pub fn from_csv_path(
        path: impl AsRef<Path>,
        corridor: Option<&dyn Corridor>,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_csv_reader(file, corridor)?;
        tracing::info!(
            path = %path.display(),
            stations = catalog.len(),
            dropped = catalog.dropped_rows(),
            "Loaded station price list"
        );
        Ok(catalog)
    }

    /// A new catalog holding only the stations inside `corridor`, in the same
    /// order. `self` is left untouched.
    pub fn filter_to(&self, corridor: &dyn Corridor) -> Self {
        Self {
            stations: self
                .stations
                .iter()
                .filter(|s| corridor.contains(s.latitude, s.longitude))
                .cloned()
                .collect(),
            dropped_rows: self.dropped_rows,
        }
    }

    pub fn stations(&self) -> &[FuelStation] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Rows skipped during load because they could not be parsed.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}

impl FromIterator<FuelStation> for StationCatalog {
    fn from_iter<T: IntoIterator<Item = FuelStation>>(iter: T) -> Self {
        Self {
            stations: iter.into_iter().collect(),
            dropped_rows: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoutePoint;
    use crate::spatial::CorridorPolygon;

    const PRICE_LIST: &str = "\
Truckstop Name,Address,Latitude,Longitude,Retail Price
PILOT TRAVEL CENTER #1,I-80 EXIT 1,40.10,-75.10,3.10
LOVES #2,I-80 EXIT 2,not-a-number,-75.20,3.20
FLYING J #3,I-80 EXIT 3,40.30,-75.30,
TA #4,I-80 EXIT 4,40.40,-75.40,2.95
SHORT ROW
";

    fn corridor() -> CorridorPolygon {
        CorridorPolygon::new(vec![
            RoutePoint::new(40.0, -75.25),
            RoutePoint::new(40.0, -75.0),
            RoutePoint::new(40.5, -75.0),
            RoutePoint::new(40.5, -75.25),
        ])
    }

    #[test]
    fn csv_load_skips_malformed_rows() {
        let catalog = StationCatalog::from_csv_reader(PRICE_LIST.as_bytes(), None).unwrap();

        let names: Vec<&str> = catalog.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["PILOT TRAVEL CENTER #1", "TA #4"]);
        assert_eq!(catalog.dropped_rows(), 3);
    }

    #[test]
    fn csv_load_accepts_plain_headers() {
        let csv = "name,latitude,longitude,price\nA,1.0,2.0,3.5\n";
        let catalog = StationCatalog::from_csv_reader(csv.as_bytes(), None).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].price_per_gallon, 3.5);
    }

    #[test]
    fn corridor_restricts_stations() {
        let corridor = corridor();
        let catalog = StationCatalog::from_csv_reader(PRICE_LIST.as_bytes(), Some(&corridor)).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].name, "PILOT TRAVEL CENTER #1");
    }

    #[test]
    fn filter_to_is_a_subset_and_keeps_order() {
        let full = StationCatalog::load(
            vec![
                RawStationRecord::new("a", "40.1", "-75.1", "3.0"),
                RawStationRecord::new("b", "40.2", "-76.0", "3.0"),
                RawStationRecord::new("c", "40.3", "-75.2", "3.0"),
            ],
            None,
        );
        let corridor = corridor();
        let filtered = full.filter_to(&corridor);

        let names: Vec<&str> = filtered.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(full.len(), 3);
        for station in filtered.stations() {
            assert!(full.stations().contains(station));
            assert!(corridor.contains(station.latitude, station.longitude));
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("fuel-core-missing-price-list.csv");
        let err = StationCatalog::from_csv_path(&path, None).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn reads_price_list_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "fuel-core-price-list-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, PRICE_LIST).unwrap();
        let catalog = StationCatalog::from_csv_path(&path, None).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 2);
    }
}

//! Configuration for a single analysis run.
//!
//! Carries the input location, the station lookup table and the
//! diagnostic output settings explicitly instead of reading globals.

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_PREVIEW_ROWS, STATION_MAP};
use std::path::PathBuf;
use tracing::debug;

/// A supported city and the station code its observations are filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationEntry {
    pub city: String,
    pub code: String,
}

/// Global configuration for weather analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Path of the CSV export to analyse
    pub data_path: PathBuf,

    /// City abbreviation to station code lookup table
    pub stations: Vec<StationEntry>,

    /// Echo intermediate tables to stdout
    pub verbose: bool,

    /// Rows shown per intermediate table
    pub preview_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            stations: STATION_MAP
                .iter()
                .map(|(city, code)| StationEntry {
                    city: city.to_string(),
                    code: code.to_string(),
                })
                .collect(),
            verbose: false,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration reading from a specific file
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Enable or disable the diagnostic echo
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Resolve a city abbreviation to its station code
    pub fn station_code(&self, city: &str) -> Option<&str> {
        let code = self
            .stations
            .iter()
            .find(|entry| entry.city == city)
            .map(|entry| entry.code.as_str());

        debug!("Resolved city {} to station {:?}", city, code);
        code
    }

    /// Supported city abbreviations in table order
    pub fn cities(&self) -> Vec<&str> {
        self.stations
            .iter()
            .map(|entry| entry.city.as_str())
            .collect()
    }

    /// Human readable list of cities, e.g. "bos, jnu, or mia"
    pub fn city_choices(&self) -> String {
        let cities = self.cities();
        match cities.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            [first, second] => format!("{} or {}", first, second),
            [init @ .., last] => format!("{}, or {}", init.join(", "), last),
        }
    }
}

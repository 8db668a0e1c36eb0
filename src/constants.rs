//! Application constants for the historical weather analyser
//!
//! This module contains the default input location, the station lookup
//! table, the column names of the NOAA daily summary export, and the
//! ranges the command-line query is validated against.

// =============================================================================
// Input Defaults
// =============================================================================

/// Default location of the NOAA daily summaries export, relative to the
/// working directory
pub const DEFAULT_DATA_PATH: &str = "data/noaa_historical_weather_10yr.csv";

/// Number of rows echoed when printing a sample of an intermediate table
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// =============================================================================
// Stations
// =============================================================================

/// Supported city abbreviations and the GHCN station codes they resolve to
///
/// - bos: Boston Logan International Airport
/// - jnu: Juneau International Airport
/// - mia: Miami International Airport
pub const STATION_MAP: &[(&str, &str)] = &[
    ("bos", "USW00014739"),
    ("jnu", "USW00025309"),
    ("mia", "USW00012839"),
];

// =============================================================================
// Column Names
// =============================================================================

/// Column names used by the NOAA GHCN-Daily CSV export
pub mod columns {
    /// Precipitation amount
    pub const PRECIPITATION: &str = "PRCP";

    /// Snowfall amount
    pub const SNOWFALL: &str = "SNOW";

    /// Maximum temperature
    pub const MAX_TEMPERATURE: &str = "TMAX";

    /// Minimum temperature
    pub const MIN_TEMPERATURE: &str = "TMIN";

    /// Station code
    pub const STATION: &str = "STATION";

    /// Observation date
    pub const DATE: &str = "DATE";

    /// Columns kept after projection, in output order
    pub const REQUIRED: &[&str] = &[
        PRECIPITATION,
        SNOWFALL,
        MAX_TEMPERATURE,
        MIN_TEMPERATURE,
        STATION,
        DATE,
    ];
}

// =============================================================================
// Query Limits
// =============================================================================

/// First year covered by the dataset
pub const MIN_YEAR: i64 = 2010;

/// Last year covered by the dataset
pub const MAX_YEAR: i64 = 2019;

pub const MIN_MONTH: i64 = 1;
pub const MAX_MONTH: i64 = 12;

/// Accepted date formats for the DATE column, tried in order
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

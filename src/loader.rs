//! Record loading for NOAA daily summary exports.
//!
//! Reads the CSV with polars, projects the columns the analysis needs,
//! keeps one station's rows and derives the calendar year and month from
//! the DATE column. The input file handle only lives for the duration of
//! [`RecordLoader::load`].

use crate::constants::columns::{
    DATE, MAX_TEMPERATURE, MIN_TEMPERATURE, PRECIPITATION, REQUIRED, SNOWFALL, STATION,
};
use crate::constants::{DATE_FORMAT, DATETIME_FORMAT};
use crate::error::{Result, WeatherError};
use crate::models::DailyRecord;
use crate::report::{DerivedColumn, Diagnostics, RecordPreview};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, info};

/// One station's daily records, loaded once and never mutated afterwards
#[derive(Debug, Clone)]
pub struct StationDataset {
    station_code: String,
    records: Vec<DailyRecord>,
}

impl StationDataset {
    pub fn station_code(&self) -> &str {
        &self.station_code
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads station records from a CSV export
#[derive(Debug, Clone)]
pub struct RecordLoader {
    data_path: PathBuf,
    diagnostics: Diagnostics,
}

impl RecordLoader {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            diagnostics: Diagnostics::silent(),
        }
    }

    /// Echo a sample of the loaded table through the given diagnostics
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Load every record filed under `station_code`
    pub fn load(&self, station_code: &str) -> Result<StationDataset> {
        let raw = self.read_csv()?;
        self.check_columns(&raw)?;

        let frame = project_station(raw, station_code)?;
        let records = extract_records(&frame, station_code)?;

        info!(
            "Loaded {} rows for station {} from {}",
            records.len(),
            station_code,
            self.data_path.display()
        );
        self.diagnostics.section(
            "Data sample:",
            RecordPreview::new(
                &records,
                self.diagnostics.preview_rows(),
                DerivedColumn::None,
            ),
        );

        Ok(StationDataset {
            station_code: station_code.to_string(),
            records,
        })
    }

    fn read_csv(&self) -> Result<DataFrame> {
        debug!("Reading CSV file: {}", self.data_path.display());

        let file = File::open(&self.data_path)
            .map_err(|e| WeatherError::io(self.data_path.clone(), e))?;

        // Full-file inference keeps columns with late decimal values as floats
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(file)
            .finish()?;

        debug!(
            "Read {} rows and {} columns",
            frame.height(),
            frame.width()
        );
        Ok(frame)
    }

    fn check_columns(&self, frame: &DataFrame) -> Result<()> {
        let missing: Vec<String> = REQUIRED
            .iter()
            .filter(|name| frame.get_column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(WeatherError::MissingColumns {
                path: self.data_path.clone(),
                missing,
            })
        }
    }
}

/// Keep the required columns and the rows of one station
fn project_station(frame: DataFrame, station_code: &str) -> Result<DataFrame> {
    let numeric = |name: &str| col(name).cast(DataType::Float64);

    let projected = frame
        .lazy()
        .select([
            numeric(PRECIPITATION),
            numeric(SNOWFALL),
            numeric(MAX_TEMPERATURE),
            numeric(MIN_TEMPERATURE),
            col(STATION).cast(DataType::String),
            col(DATE).cast(DataType::String),
        ])
        .filter(col(STATION).eq(lit(station_code)))
        .collect()?;

    debug!(
        "{} rows remain after filtering to station {}",
        projected.height(),
        station_code
    );
    Ok(projected)
}

fn extract_records(frame: &DataFrame, station_code: &str) -> Result<Vec<DailyRecord>> {
    let precipitation = frame.column(PRECIPITATION)?.f64()?;
    let snowfall = frame.column(SNOWFALL)?.f64()?;
    let max_temperature = frame.column(MAX_TEMPERATURE)?.f64()?;
    let min_temperature = frame.column(MIN_TEMPERATURE)?.f64()?;
    let stations = frame.column(STATION)?.str()?;
    let dates = frame.column(DATE)?.str()?;

    let mut records = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        // A blank cell loads as null and is rejected like any malformed date
        let date = parse_date(dates.get(row).unwrap_or(""))?;

        records.push(DailyRecord {
            station: stations.get(row).unwrap_or(station_code).to_string(),
            date,
            year: date.year(),
            month: date.month(),
            precipitation: precipitation.get(row),
            snowfall: snowfall.get(row),
            max_temperature: max_temperature.get(row),
            min_temperature: min_temperature.get(row),
        });
    }

    Ok(records)
}

/// Parse an ISO date, also accepting a full ISO date-time
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|error| {
            NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .map(|datetime| datetime.date())
                .map_err(|_| error)
        })
        .map_err(|source| WeatherError::DateParsing {
            value: value.to_string(),
            source,
        })
}

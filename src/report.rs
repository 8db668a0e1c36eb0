//! Diagnostic echo of intermediate pipeline states.
//!
//! When verbose output is requested the loader and aggregator print small
//! samples of the tables they work on. This is purely observational and
//! never influences the computed result.

use crate::config::AnalysisConfig;
use crate::models::DailyRecord;
use colored::*;
use std::collections::BTreeMap;
use std::fmt;

/// Prints headed samples to stdout when enabled
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    enabled: bool,
    preview_rows: usize,
}

impl Diagnostics {
    pub fn new(enabled: bool, preview_rows: usize) -> Self {
        Self {
            enabled,
            preview_rows,
        }
    }

    /// Diagnostics that never print anything
    pub fn silent() -> Self {
        Self::new(false, 0)
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.verbose, config.preview_rows)
    }

    pub fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    /// Print a single line
    pub fn line(&self, message: impl fmt::Display) {
        if self.enabled {
            println!("{}", message);
        }
    }

    /// Print a heading followed by a rendered table
    pub fn section(&self, heading: &str, body: impl fmt::Display) {
        if self.enabled {
            println!("{}", heading.bright_cyan());
            println!("{}", body);
        }
    }
}

/// Extra derived column shown next to the observed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedColumn {
    None,
    TotalPrecipitation,
    TemperatureDelta,
}

/// Fixed-width rendering of the first rows of a record set
pub struct RecordPreview<'a> {
    records: Vec<&'a DailyRecord>,
    total_rows: usize,
    derived: DerivedColumn,
}

impl<'a> RecordPreview<'a> {
    pub fn new<I>(records: I, limit: usize, derived: DerivedColumn) -> Self
    where
        I: IntoIterator<Item = &'a DailyRecord>,
    {
        let mut total_rows = 0;
        let mut shown = Vec::with_capacity(limit);
        for record in records {
            if shown.len() < limit {
                shown.push(record);
            }
            total_rows += 1;
        }

        Self {
            records: shown,
            total_rows,
            derived,
        }
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| format!("{:.1}", v))
}

impl fmt::Display for RecordPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:<12} {:>6} {:>6} {:>8} {:>8} {:>5} {:>6}",
            "STATION", "DATE", "YEAR", "MONTH", "PRCP", "SNOW", "TMAX", "TMIN"
        )?;
        match self.derived {
            DerivedColumn::None => {}
            DerivedColumn::TotalPrecipitation => write!(f, " {:>12}", "TOTAL_PRECIP")?,
            DerivedColumn::TemperatureDelta => write!(f, " {:>10}", "TEMP_DELTA")?,
        }

        for record in &self.records {
            write!(
                f,
                "\n{:<12} {:<12} {:>6} {:>6} {:>8} {:>8} {:>5} {:>6}",
                record.station,
                record.date.to_string(),
                record.year,
                record.month,
                cell(record.precipitation),
                cell(record.snowfall),
                cell(record.max_temperature),
                cell(record.min_temperature),
            )?;
            match self.derived {
                DerivedColumn::None => {}
                DerivedColumn::TotalPrecipitation => {
                    write!(f, " {:>12.2}", record.total_precipitation())?
                }
                DerivedColumn::TemperatureDelta => {
                    write!(f, " {:>10}", cell(record.temperature_delta()))?
                }
            }
        }

        write!(f, "\n[{} rows]", self.total_rows)
    }
}

/// Per-year counts rendered one year per line
pub struct YearCounts<'a>(pub &'a BTreeMap<i32, usize>);

impl fmt::Display for YearCounts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {:>6}", "YEAR", "DAYS")?;
        for (year, count) in self.0 {
            write!(f, "\n{:<6} {:>6}", year, count)?;
        }
        Ok(())
    }
}

//! Core data structures and types for weather analysis.
//!
//! Defines the daily observation record, the supported operations and
//! the result value reported back to the caller.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// One station's observations for one calendar day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub station: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub precipitation: Option<f64>,
    pub snowfall: Option<f64>,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
}

impl DailyRecord {
    /// Combined rain and snow amount, treating missing values as zero
    pub fn total_precipitation(&self) -> f64 {
        self.precipitation.unwrap_or(0.0) + self.snowfall.unwrap_or(0.0)
    }

    /// Whether any precipitation fell on this day
    pub fn is_precipitation_day(&self) -> bool {
        self.total_precipitation() > 0.0
    }

    /// Difference between the day's maximum and minimum temperature
    ///
    /// Returns `None` when either temperature was not recorded.
    pub fn temperature_delta(&self) -> Option<f64> {
        Some(self.max_temperature? - self.min_temperature?)
    }
}

/// Calculations the analyser can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Greatest single-day temperature change
    MaxTempDelta,
    /// Average yearly days of precipitation
    DaysOfPrecip,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::MaxTempDelta, Operation::DaysOfPrecip];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Operation::MaxTempDelta => "max-temp-delta",
            Operation::DaysOfPrecip => "days-of-precip",
        }
    }

    /// Label used when reporting a result
    pub fn report_label(&self) -> &'static str {
        match self {
            Operation::MaxTempDelta => "max_temp_delta",
            Operation::DaysOfPrecip => "days_of_precip",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.name() == s)
            .ok_or_else(|| format!("Unknown function name: {}", s))
    }
}

/// Outcome of a single analysis run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub operation: Operation,
    pub value: f64,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1}", self.operation.report_label(), self.value)
    }
}

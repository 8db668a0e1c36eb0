//! Query validation.
//!
//! Turns the raw command-line request into an immutable [`Query`]. Every
//! check runs independently and all violations are reported together, so a
//! caller sees the complete list of problems in one pass.

use crate::config::AnalysisConfig;
use crate::constants::{MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR};
use crate::models::Operation;
use std::fmt;
use tracing::debug;

/// Unvalidated request as supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub function_name: String,
    pub city: Option<String>,
    pub year: Option<i64>,
    pub month: Option<i64>,
}

/// A validated analysis request
///
/// Only constructed through [`Query::from_request`], so the month is always
/// paired with a year, both are in range and only present for
/// [`Operation::MaxTempDelta`], and the station code is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    operation: Operation,
    city: String,
    station_code: String,
    year: Option<i32>,
    month: Option<u32>,
}

impl Query {
    /// Validate a request against the configured station table
    pub fn from_request(
        request: &QueryRequest,
        config: &AnalysisConfig,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let operation = request.function_name.parse::<Operation>().ok();
        if operation.is_none() {
            errors.push(format!(
                "Function name must be either {} or {}.",
                Operation::MaxTempDelta,
                Operation::DaysOfPrecip
            ));
        }
        let allows_window = operation == Some(Operation::MaxTempDelta);

        if let Some(month) = request.month {
            if !allows_window {
                errors.push(format!(
                    "Function name must be {} to specify a month.",
                    Operation::MaxTempDelta
                ));
            }
            if request.year.is_none() {
                errors.push("Specifying a month requires a year.");
            }
            if !(MIN_MONTH..=MAX_MONTH).contains(&month) {
                errors.push(format!(
                    "Month must be between {} and {}.",
                    MIN_MONTH, MAX_MONTH
                ));
            }
        }

        if let Some(year) = request.year {
            if !allows_window {
                errors.push(format!(
                    "Function name must be {} to specify a year.",
                    Operation::MaxTempDelta
                ));
            }
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                errors.push(format!(
                    "Year must be between {} and {}.",
                    MIN_YEAR, MAX_YEAR
                ));
            }
        }

        let station_code = match request.city.as_deref() {
            Some(city) => {
                let code = config.station_code(city);
                if code.is_none() {
                    errors.push(format!("City must be either {}.", config.city_choices()));
                }
                code
            }
            None => {
                errors.push("City must be specified.");
                None
            }
        };

        match (operation, request.city.as_ref(), station_code) {
            (Some(operation), Some(city), Some(station_code)) if errors.is_empty() => {
                let query = Self {
                    operation,
                    city: city.clone(),
                    station_code: station_code.to_string(),
                    year: request.year.map(|year| year as i32),
                    month: request.month.map(|month| month as u32),
                };
                debug!("Validated query: {:?}", query);
                Ok(query)
            }
            _ => {
                debug!("Rejected request with {} violations", errors.len());
                Err(errors)
            }
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn station_code(&self) -> &str {
        &self.station_code
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }
}

/// Every violation found while validating a request, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

//! Error handling for weather analysis operations.
//!
//! Provides error types with context for input loading, date parsing,
//! query validation and aggregation failures.

use crate::query::ValidationErrors;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Input file {path} is missing required columns: {}", missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("Invalid date '{value}': {source}")]
    DateParsing {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid query:\n{0}")]
    InvalidQuery(ValidationErrors),

    #[error("No data for {operation} ({filter})")]
    EmptyResult { operation: String, filter: String },
}

impl WeatherError {
    /// Create an I/O error for the given input path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an empty result error
    pub fn empty_result(operation: impl ToString, filter: impl Into<String>) -> Self {
        Self::EmptyResult {
            operation: operation.to_string(),
            filter: filter.into(),
        }
    }
}

impl From<ValidationErrors> for WeatherError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidQuery(errors)
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

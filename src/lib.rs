//! Historical Weather Analysis Library
//!
//! Computes simple descriptive statistics over a NOAA daily summaries
//! export for one weather station:
//! - the greatest single-day temperature change, optionally restricted to
//!   a year and month
//! - the average number of days with precipitation per year
//!
//! The pipeline is a single sequential pass: validate the request, load
//! and filter the station's records, aggregate, report.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod processor;
pub mod query;
pub mod report;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use error::{Result, WeatherError};
pub use loader::{RecordLoader, StationDataset};
pub use models::{AnalysisResult, DailyRecord, Operation};
pub use processor::WeatherProcessor;
pub use query::{Query, QueryRequest, ValidationErrors};

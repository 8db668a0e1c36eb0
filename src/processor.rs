//! Analysis pipeline.
//!
//! Runs one validated query end to end: load the station's records,
//! aggregate them with the selected operation and report the result.

use crate::aggregate;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::loader::{RecordLoader, StationDataset};
use crate::models::{AnalysisResult, Operation};
use crate::query::Query;
use crate::report::Diagnostics;

use std::time::Instant;
use tracing::{debug, info};

/// Runs analysis queries against a configured input file
#[derive(Debug, Clone)]
pub struct WeatherProcessor {
    config: AnalysisConfig,
    diagnostics: Diagnostics,
}

impl WeatherProcessor {
    pub fn new(config: AnalysisConfig) -> Self {
        let diagnostics = Diagnostics::from_config(&config);
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Echo the validated request when verbose output is enabled
    pub fn describe_query(&self, query: &Query) {
        self.diagnostics.line("Verbose output enabled.");
        self.diagnostics
            .line(format!("Function name: {}", query.operation()));
        self.diagnostics.line(format!(
            "City: {}, maps to {}",
            query.city(),
            query.station_code()
        ));
        if let Some(year) = query.year() {
            self.diagnostics.line(format!("Year: {}", year));
        }
        if let Some(month) = query.month() {
            self.diagnostics.line(format!("Month: {}", month));
        }
    }

    /// Load the query's station from the configured file
    pub fn load(&self, query: &Query) -> Result<StationDataset> {
        self.diagnostics.line("Processing file...");
        RecordLoader::new(&self.config.data_path)
            .with_diagnostics(self.diagnostics)
            .load(query.station_code())
    }

    /// Aggregate an already loaded dataset
    pub fn aggregate(&self, query: &Query, dataset: &StationDataset) -> Result<AnalysisResult> {
        let records = dataset.records();
        let value = match query.operation() {
            Operation::MaxTempDelta => {
                aggregate::max_temp_delta(records, query.year(), query.month(), &self.diagnostics)?
            }
            Operation::DaysOfPrecip => aggregate::days_of_precip(records, &self.diagnostics)?,
        };

        Ok(AnalysisResult {
            operation: query.operation(),
            value,
        })
    }

    /// Run the full pipeline for one query
    pub fn run(&self, query: &Query) -> Result<AnalysisResult> {
        let start_time = Instant::now();
        info!(
            "Running {} for {} ({})",
            query.operation(),
            query.city(),
            query.station_code()
        );

        let dataset = self.load(query)?;
        let result = self.aggregate(query, &dataset)?;

        debug!(
            "{} computed in {}ms",
            result,
            start_time.elapsed().as_millis()
        );
        Ok(result)
    }
}

//! Command-line interface components.

use crate::config::AnalysisConfig;
use crate::constants::DEFAULT_DATA_PATH;
use crate::query::QueryRequest;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "historical_weather")]
#[command(
    about = "Perform a calculation on historical weather data: the greatest daily temperature change \
             for a particular city, or the average yearly days of precipitation for a particular city."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Required. Either max-temp-delta or days-of-precip
    #[arg(value_name = "FUNCTION_NAME")]
    pub function_name: String,

    /// Required. Which city to evaluate: bos, jnu, or mia
    #[arg(short, long)]
    pub city: Option<String>,

    /// (max-temp-delta only) Optional. Restrict search to a particular year in the range 2010-2019.
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// (max-temp-delta only) Optional. Restrict search to a particular month in the range 1-12. Requires a year.
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i64>,

    /// Optional. Input CSV file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    pub filename: PathBuf,

    /// Optional. Print more output than just the solution.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The analysis request, not yet validated
    pub fn request(&self) -> QueryRequest {
        QueryRequest {
            function_name: self.function_name.clone(),
            city: self.city.clone(),
            year: self.year,
            month: self.month,
        }
    }

    /// Configuration derived from the defaults and the given flags
    pub fn config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_data_path(&self.filename)
            .with_verbose(self.verbose)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("historical_weather={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_invocation() {
        let args = Args::try_parse_from([
            "historical_weather",
            "max-temp-delta",
            "-c",
            "bos",
            "-y",
            "2015",
            "-m",
            "7",
            "-f",
            "weather.csv",
            "-v",
        ])
        .unwrap();

        assert_eq!(
            args.request(),
            QueryRequest {
                function_name: "max-temp-delta".to_string(),
                city: Some("bos".to_string()),
                year: Some(2015),
                month: Some(7),
            }
        );
        let config = args.config();
        assert_eq!(config.data_path, PathBuf::from("weather.csv"));
        assert!(config.verbose);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_defaults() {
        let args =
            Args::try_parse_from(["historical_weather", "days-of-precip", "--city", "mia"]).unwrap();

        assert_eq!(args.filename, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(!args.verbose);
        assert_eq!(args.year, None);
        assert_eq!(args.month, None);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_out_of_range_values_reach_validation() {
        let args = Args::try_parse_from([
            "historical_weather",
            "unknown",
            "--city",
            "sea",
            "--month",
            "-1",
        ])
        .unwrap();

        assert_eq!(args.function_name, "unknown");
        assert_eq!(args.city.as_deref(), Some("sea"));
        assert_eq!(args.month, Some(-1));
    }

    #[test]
    fn test_oversized_year_is_left_for_range_check() {
        let args = Args::try_parse_from([
            "historical_weather",
            "max-temp-delta",
            "-c",
            "bos",
            "-y",
            "99999999999",
        ])
        .unwrap();

        assert_eq!(args.request().year, Some(99_999_999_999));
    }

    #[test]
    fn test_function_name_is_required() {
        assert!(Args::try_parse_from(["historical_weather", "--city", "bos"]).is_err());
    }
}

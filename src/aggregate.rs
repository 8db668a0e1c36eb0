//! Aggregations over a station's daily records.
//!
//! Narrowing by year or month produces borrowed views of the loaded
//! records; nothing here mutates the dataset.

use crate::error::{Result, WeatherError};
use crate::models::{DailyRecord, Operation};
use crate::report::{DerivedColumn, Diagnostics, RecordPreview, YearCounts};
use std::collections::BTreeMap;
use tracing::debug;

/// Records observed in `year`
pub fn filter_by_year<'a, I>(records: I, year: i32) -> Vec<&'a DailyRecord>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    records
        .into_iter()
        .filter(|record| record.year == year)
        .collect()
}

/// Records observed in `month` of any year
pub fn filter_by_month<'a, I>(records: I, month: u32) -> Vec<&'a DailyRecord>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    records
        .into_iter()
        .filter(|record| record.month == month)
        .collect()
}

/// Narrow to an optional year, then an optional month
pub fn filter_window(
    records: &[DailyRecord],
    year: Option<i32>,
    month: Option<u32>,
) -> Vec<&DailyRecord> {
    let by_year = match year {
        Some(year) => filter_by_year(records, year),
        None => records.iter().collect(),
    };
    match month {
        Some(month) => filter_by_month(by_year, month),
        None => by_year,
    }
}

fn describe_window(year: Option<i32>, month: Option<u32>) -> String {
    match (year, month) {
        (Some(year), Some(month)) => format!("year {}, month {}", year, month),
        (Some(year), None) => format!("year {}", year),
        (None, Some(month)) => format!("month {}", month),
        (None, None) => "all records".to_string(),
    }
}

/// Greatest single-day temperature change within the optional window
///
/// Days missing either temperature reading are skipped. Fails with
/// [`WeatherError::EmptyResult`] when no day in the window has both.
pub fn max_temp_delta(
    records: &[DailyRecord],
    year: Option<i32>,
    month: Option<u32>,
    diagnostics: &Diagnostics,
) -> Result<f64> {
    let window = filter_window(records, year, month);
    debug!(
        "{} of {} records in window ({})",
        window.len(),
        records.len(),
        describe_window(year, month)
    );

    diagnostics.section(
        "With temp delta:",
        RecordPreview::new(
            window.iter().copied(),
            diagnostics.preview_rows(),
            DerivedColumn::TemperatureDelta,
        ),
    );

    window
        .iter()
        .filter_map(|record| record.temperature_delta())
        .reduce(f64::max)
        .ok_or_else(|| {
            WeatherError::empty_result(Operation::MaxTempDelta, describe_window(year, month))
        })
}

/// Count precipitation days per calendar year
///
/// A year only appears once it has at least one day with precipitation, so
/// dry years are absent rather than zero.
pub fn precip_days_by_year(records: &[DailyRecord]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for record in records.iter().filter(|record| record.is_precipitation_day()) {
        *counts.entry(record.year).or_insert(0) += 1;
    }
    counts
}

/// Average number of precipitation days per year
///
/// Years without any precipitation day are excluded from the average. Fails
/// with [`WeatherError::EmptyResult`] when no year qualifies.
pub fn days_of_precip(records: &[DailyRecord], diagnostics: &Diagnostics) -> Result<f64> {
    diagnostics.section(
        "With total precipitation:",
        RecordPreview::new(
            records,
            diagnostics.preview_rows(),
            DerivedColumn::TotalPrecipitation,
        ),
    );

    let counts = precip_days_by_year(records);
    diagnostics.section("Grouped by year:", YearCounts(&counts));
    debug!("Precipitation days by year: {:?}", counts);

    if counts.is_empty() {
        return Err(WeatherError::empty_result(
            Operation::DaysOfPrecip,
            "no day with precipitation",
        ));
    }

    let total: usize = counts.values().sum();
    Ok(total as f64 / counts.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, dom: u32) -> DailyRecord {
        DailyRecord {
            station: "USW00014739".to_string(),
            date: NaiveDate::from_ymd_opt(year, month, dom).unwrap(),
            year,
            month,
            precipitation: None,
            snowfall: None,
            max_temperature: None,
            min_temperature: None,
        }
    }

    fn temps(mut record: DailyRecord, max: f64, min: f64) -> DailyRecord {
        record.max_temperature = Some(max);
        record.min_temperature = Some(min);
        record
    }

    fn precip(mut record: DailyRecord, prcp: Option<f64>, snow: Option<f64>) -> DailyRecord {
        record.precipitation = prcp;
        record.snowfall = snow;
        record
    }

    fn sample_year_span() -> Vec<DailyRecord> {
        let mut records = Vec::new();
        for year in [2014, 2015] {
            for month in [1, 7, 12] {
                for dom in [1, 15] {
                    records.push(temps(day(year, month, dom), 50.0 + dom as f64, 40.0));
                }
            }
        }
        records
    }

    #[test]
    fn test_year_and_month_filters_commute() {
        let records = sample_year_span();

        for year in [2013, 2014, 2015] {
            for month in 1..=12 {
                let year_then_month = filter_by_month(filter_by_year(&records, year), month);
                let month_then_year = filter_by_year(filter_by_month(&records, month), year);
                assert_eq!(year_then_month, month_then_year);
            }
        }
    }

    #[test]
    fn test_filter_window() {
        let records = sample_year_span();

        assert_eq!(filter_window(&records, None, None).len(), 12);
        assert_eq!(filter_window(&records, Some(2015), None).len(), 6);
        assert_eq!(filter_window(&records, Some(2015), Some(7)).len(), 2);
        assert!(filter_window(&records, Some(2016), None).is_empty());
    }

    #[test]
    fn test_max_temp_delta_single_record() {
        let records = vec![temps(day(2015, 7, 4), 91.5, 70.2)];
        let delta = max_temp_delta(&records, None, None, &Diagnostics::silent()).unwrap();
        assert_eq!(delta, 91.5 - 70.2);
    }

    #[test]
    fn test_max_temp_delta_respects_window() {
        let mut records = sample_year_span();
        records.push(temps(day(2015, 3, 10), 70.0, 20.0));

        let silent = Diagnostics::silent();
        assert_eq!(max_temp_delta(&records, None, None, &silent).unwrap(), 50.0);
        assert_eq!(max_temp_delta(&records, Some(2015), None, &silent).unwrap(), 50.0);
        assert_eq!(
            max_temp_delta(&records, Some(2015), Some(7), &silent).unwrap(),
            25.0
        );
        assert_eq!(max_temp_delta(&records, Some(2014), None, &silent).unwrap(), 25.0);
    }

    #[test]
    fn test_max_temp_delta_skips_missing_temperatures() {
        let records = vec![
            day(2015, 7, 1),
            temps(day(2015, 7, 2), 80.0, 71.0),
            day(2015, 7, 3),
        ];
        let delta = max_temp_delta(&records, Some(2015), Some(7), &Diagnostics::silent()).unwrap();
        assert_eq!(delta, 9.0);
    }

    #[test]
    fn test_max_temp_delta_empty_window_is_error() {
        let records = sample_year_span();
        let result = max_temp_delta(&records, Some(2012), Some(2), &Diagnostics::silent());

        match result {
            Err(WeatherError::EmptyResult { operation, filter }) => {
                assert_eq!(operation, "max-temp-delta");
                assert_eq!(filter, "year 2012, month 2");
            }
            other => panic!("expected empty result, got {:?}", other),
        }

        let no_temperatures = vec![day(2015, 7, 1)];
        assert!(max_temp_delta(&no_temperatures, None, None, &Diagnostics::silent()).is_err());
    }

    #[test]
    fn test_precip_days_by_year_excludes_dry_years() {
        let records = vec![
            precip(day(2010, 1, 1), Some(0.2), None),
            precip(day(2010, 1, 2), None, Some(1.0)),
            precip(day(2010, 1, 3), None, None),
            precip(day(2011, 5, 1), Some(0.0), Some(0.0)),
            precip(day(2011, 5, 2), None, None),
            precip(day(2012, 6, 1), Some(0.01), Some(0.0)),
        ];

        let counts = precip_days_by_year(&records);
        assert_eq!(counts, BTreeMap::from([(2010, 2), (2012, 1)]));
        assert!(!counts.contains_key(&2011));
    }

    #[test]
    fn test_days_of_precip_mean_over_wet_years() {
        let mut records = Vec::new();
        for dom in 1..=4 {
            records.push(precip(day(2016, 2, dom), Some(0.1), None));
        }
        for dom in 1..=2 {
            records.push(precip(day(2017, 2, dom), None, Some(3.0)));
        }
        // 2018 has observations but no precipitation
        for dom in 1..=10 {
            records.push(precip(day(2018, 2, dom), Some(0.0), None));
        }

        let mean = days_of_precip(&records, &Diagnostics::silent()).unwrap();
        assert_eq!(mean, 3.0);
    }

    #[test]
    fn test_days_of_precip_without_any_wet_day_is_error() {
        let records = vec![precip(day(2016, 2, 1), None, None)];
        let result = days_of_precip(&records, &Diagnostics::silent());
        assert!(matches!(result, Err(WeatherError::EmptyResult { .. })));

        assert!(days_of_precip(&[], &Diagnostics::silent()).is_err());
    }
}

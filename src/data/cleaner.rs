//! Data Cleaner Module
//! Turns the raw dataset into an analysis-ready table: drops incomplete and
//! duplicate rows, then derives hour-of-day and day-of-week columns when a
//! `datetime` column is available.

use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::data::{has_column, DATETIME_COL, DAY_OF_WEEK_COL, HOUR_COL};

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("column 'datetime' has unsupported type {0}")]
    UnsupportedDatetimeType(String),
}

/// Handles dataset cleaning and time-feature derivation.
pub struct DataCleaner;

impl DataCleaner {
    /// Produce a cleaned copy of the raw table.
    ///
    /// Consumes the input so no alias of the pre-clean state survives. Rows
    /// with a missing value in any column are dropped first, then exact
    /// duplicates (first occurrence kept, row order preserved). May return
    /// an empty table if every row was dropped.
    pub fn clean(df: DataFrame) -> Result<DataFrame, CleanError> {
        let rows_before = df.height();

        let timestamp = if has_column(&df, DATETIME_COL) {
            Some(Self::timestamp_expr(&df)?)
        } else {
            info!("'datetime' column not found, time-based analysis will be limited");
            None
        };

        let mut frame = df
            .lazy()
            .drop_nulls(None)
            .unique_stable(None, UniqueKeepStrategy::First);

        if let Some(ts) = timestamp {
            frame = frame.with_columns([
                ts.clone().alias(DATETIME_COL),
                ts.clone()
                    .dt()
                    .hour()
                    .cast(DataType::Int32)
                    .alias(HOUR_COL),
                ts.dt().strftime("%A").alias(DAY_OF_WEEK_COL),
            ]);
        }

        let cleaned = frame.collect()?;
        debug!(
            rows_before,
            rows_after = cleaned.height(),
            "dropped incomplete and duplicate rows"
        );
        Ok(cleaned)
    }

    /// Expression yielding a timestamp-typed `datetime` column.
    ///
    /// Already-typed columns pass through; string columns are parsed
    /// strictly, so a malformed value fails the run rather than being
    /// silently dropped.
    fn timestamp_expr(df: &DataFrame) -> Result<Expr, CleanError> {
        let dtype = df.column(DATETIME_COL)?.dtype().clone();
        match dtype {
            DataType::Datetime(_, _) | DataType::Date => Ok(col(DATETIME_COL)),
            DataType::String => Ok(col(DATETIME_COL).str().to_datetime(
                Some(TimeUnit::Microseconds),
                None,
                StrptimeOptions::default(),
                lit("raise"),
            )),
            other => Err(CleanError::UnsupportedDatetimeType(format!("{other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_rows_with_missing_values() {
        let df = df!(
            "demand" => &[Some(5i64), None, Some(2)],
            "supply" => &[Some(4i64), Some(4), Some(1)],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(cleaned.column("demand").unwrap().null_count(), 0);
        assert_eq!(cleaned.column("supply").unwrap().null_count(), 0);
    }

    #[test]
    fn drops_exact_duplicates_keeping_first() {
        let df = df!(
            "demand" => &[5i64, 5, 2],
            "supply" => &[4i64, 4, 1],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert_eq!(cleaned.height(), 2);

        let demand: Vec<i64> = cleaned
            .column("demand")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(demand, vec![5, 2]);
    }

    #[test]
    fn derives_hour_and_day_of_week() {
        // 2016-01-04 was a Monday
        let df = df!(
            "datetime" => &["2016-01-04 08:30:00", "2016-01-05 17:05:00"],
            "demand" => &[10i64, 12],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();

        let hours: Vec<i32> = cleaned
            .column(HOUR_COL)
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(hours, vec![8, 17]);
        assert!(hours.iter().all(|h| (0..24).contains(h)));

        let days: Vec<&str> = cleaned
            .column(DAY_OF_WEEK_COL)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(days, vec!["Monday", "Tuesday"]);
    }

    #[test]
    fn no_time_columns_without_datetime() {
        let df = df!("demand" => &[1i64, 2]).unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert!(cleaned.column(HOUR_COL).is_err());
        assert!(cleaned.column(DAY_OF_WEEK_COL).is_err());
    }

    #[test]
    fn may_return_an_empty_table() {
        let df = df!(
            "demand" => &[None::<i64>, None],
            "supply" => &[Some(1i64), None],
        )
        .unwrap();

        let cleaned = DataCleaner::clean(df).unwrap();
        assert_eq!(cleaned.height(), 0);
    }
}

//! Analysis module - chart-ready aggregations over the cleaned dataset.
//!
//! Each analysis guards its own optional input columns and reports a skip
//! instead of failing; the `hour` dependence shared by the hour-based
//! analyses lives in one precondition helper.

mod cancellations;
mod hourly;
mod locations;
mod summary;

pub use cancellations::{CancellationRates, CANCELLED_STATUS};
pub use hourly::HourlyTrends;
pub use locations::PickupLocations;
pub use summary::{ColumnSummary, DemandSupplySummary};

use polars::prelude::*;
use thiserror::Error;
use tracing::warn;

use crate::data::{has_column, HOUR_COL};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Shared precondition for the hour-based analyses.
///
/// The `hour` column only exists when the cleaner saw a `datetime` column,
/// so its absence is an expected skip, not a fault.
pub(crate) fn hour_column_available(df: &DataFrame, analysis: &str) -> bool {
    if has_column(df, HOUR_COL) {
        true
    } else {
        warn!("'hour' column not available (dataset had no 'datetime'), skipping {analysis}");
        false
    }
}

pub(crate) fn column_f64(df: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    Ok(df
        .column(name)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .flatten()
        .collect())
}

pub(crate) fn column_i32(df: &DataFrame, name: &str) -> PolarsResult<Vec<i32>> {
    Ok(df
        .column(name)?
        .cast(&DataType::Int32)?
        .i32()?
        .into_iter()
        .flatten()
        .collect())
}

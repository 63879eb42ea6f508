//! Hourly cancellation rate analysis.

use polars::prelude::*;
use tracing::warn;

use crate::analysis::{column_f64, column_i32, hour_column_available, AnalysisError};
use crate::data::{has_column, HOUR_COL, STATUS_COL};

/// Status value counted as a cancellation. Exact, case-sensitive match.
pub const CANCELLED_STATUS: &str = "cancelled";

const CANCELLATION_RATE_COL: &str = "cancellation_rate";

/// Mean cancellation rate per observed hour, each rate in [0, 1].
#[derive(Debug, Clone)]
pub struct CancellationRates {
    pub hours: Vec<i32>,
    pub rates: Vec<f64>,
}

impl CancellationRates {
    /// Derive the per-row cancellation indicator and average it by hour.
    pub fn compute(df: &DataFrame) -> Result<Option<Self>, AnalysisError> {
        if !has_column(df, STATUS_COL) {
            warn!("'status' column not found, skipping cancellation rate analysis");
            return Ok(None);
        }
        if !hour_column_available(df, "cancellation rate analysis") {
            return Ok(None);
        }

        let rates = df
            .clone()
            .lazy()
            .with_column(
                col(STATUS_COL)
                    .eq(lit(CANCELLED_STATUS))
                    .cast(DataType::Float64)
                    .alias(CANCELLATION_RATE_COL),
            )
            .group_by([col(HOUR_COL)])
            .agg([col(CANCELLATION_RATE_COL).mean()])
            .sort([HOUR_COL], Default::default())
            .collect()?;

        Ok(Some(Self {
            hours: column_i32(&rates, HOUR_COL)?,
            rates: column_f64(&rates, CANCELLATION_RATE_COL)?,
        }))
    }

    /// Hour with the highest cancellation rate.
    pub fn worst_hour(&self) -> Option<(i32, f64)> {
        self.hours
            .iter()
            .zip(&self.rates)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(&hour, &rate)| (hour, rate))
    }
}

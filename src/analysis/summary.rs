//! Descriptive statistics for the demand and supply series.

use polars::prelude::DataFrame;
use tracing::warn;

use crate::analysis::{column_f64, AnalysisError};
use crate::data::{has_column, DEMAND_COL, SUPPLY_COL};

/// Descriptive statistics for a single numeric column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub p05: f64,
    pub p95: f64,
}

impl ColumnSummary {
    /// Compute descriptive statistics for a non-empty value slice.
    fn from_values(column: &str, values: &[f64]) -> Self {
        let n = values.len();
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let variance = if n > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        Self {
            column: column.to_string(),
            count: n,
            mean,
            median,
            std: variance.sqrt(),
            p05: percentile(&sorted, 5.0),
            p95: percentile(&sorted, 95.0),
        }
    }
}

/// Summary table shown beneath the charts in the viewer.
#[derive(Debug, Clone)]
pub struct DemandSupplySummary {
    pub demand: ColumnSummary,
    pub supply: ColumnSummary,
}

impl DemandSupplySummary {
    pub fn compute(df: &DataFrame) -> Result<Option<Self>, AnalysisError> {
        if !has_column(df, DEMAND_COL) || !has_column(df, SUPPLY_COL) {
            warn!("'demand'/'supply' columns not found, skipping summary statistics");
            return Ok(None);
        }

        let demand = column_f64(df, DEMAND_COL)?;
        let supply = column_f64(df, SUPPLY_COL)?;
        if demand.is_empty() || supply.is_empty() {
            warn!("no rows left after cleaning, skipping summary statistics");
            return Ok(None);
        }

        Ok(Some(Self {
            demand: ColumnSummary::from_values(DEMAND_COL, &demand),
            supply: ColumnSummary::from_values(SUPPLY_COL, &supply),
        }))
    }
}

/// Percentile by linear interpolation over a sorted slice.
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

//! Pickup location analysis.

use polars::prelude::DataFrame;
use tracing::warn;

use crate::analysis::{column_f64, AnalysisError};
use crate::data::{has_column, PICKUP_LATITUDE_COL, PICKUP_LONGITUDE_COL};

/// Pickup coordinates, one entry per surviving row.
#[derive(Debug, Clone)]
pub struct PickupLocations {
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
}

impl PickupLocations {
    /// Extract the coordinate pair for the scatter chart.
    ///
    /// Skips unless both coordinate columns are present; partial presence
    /// is treated the same as full absence.
    pub fn compute(df: &DataFrame) -> Result<Option<Self>, AnalysisError> {
        if !has_column(df, PICKUP_LATITUDE_COL) || !has_column(df, PICKUP_LONGITUDE_COL) {
            warn!("location columns not found, skipping spatial analysis");
            return Ok(None);
        }

        Ok(Some(Self {
            latitude: column_f64(df, PICKUP_LATITUDE_COL)?,
            longitude: column_f64(df, PICKUP_LONGITUDE_COL)?,
        }))
    }
}

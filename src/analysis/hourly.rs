//! Hourly demand/supply trend analysis.

use polars::prelude::*;

use crate::analysis::{column_f64, column_i32, hour_column_available, AnalysisError};
use crate::data::{DEMAND_COL, HOUR_COL, SUPPLY_COL};

/// Total demand and supply per observed hour of day, ordered by hour.
#[derive(Debug, Clone)]
pub struct HourlyTrends {
    pub hours: Vec<i32>,
    pub demand: Vec<f64>,
    pub supply: Vec<f64>,
}

impl HourlyTrends {
    /// Group rows by hour and sum both series.
    ///
    /// Returns `None` (skip) when the cleaned table carries no time
    /// features. Missing `demand`/`supply` columns are a fault and
    /// propagate as an error.
    pub fn compute(df: &DataFrame) -> Result<Option<Self>, AnalysisError> {
        if !hour_column_available(df, "hourly trend analysis") {
            return Ok(None);
        }

        let totals = df
            .clone()
            .lazy()
            .group_by([col(HOUR_COL)])
            .agg([
                col(DEMAND_COL).sum().cast(DataType::Float64),
                col(SUPPLY_COL).sum().cast(DataType::Float64),
            ])
            .sort([HOUR_COL], Default::default())
            .collect()?;

        Ok(Some(Self {
            hours: column_i32(&totals, HOUR_COL)?,
            demand: column_f64(&totals, DEMAND_COL)?,
            supply: column_f64(&totals, SUPPLY_COL)?,
        }))
    }

    /// Hour with the highest total demand.
    pub fn peak_demand(&self) -> Option<(i32, f64)> {
        self.hours
            .iter()
            .zip(&self.demand)
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(&hour, &demand)| (hour, demand))
    }

    /// Number of hours where total demand exceeds total supply.
    pub fn undersupplied_hours(&self) -> usize {
        self.demand
            .iter()
            .zip(&self.supply)
            .filter(|(demand, supply)| demand > supply)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_demand_and_supply_per_hour() {
        let df = df!(
            "hour" => &[0i32, 0, 1],
            "demand" => &[5i64, 3, 2],
            "supply" => &[4i64, 4, 1],
        )
        .unwrap();

        let trends = HourlyTrends::compute(&df).unwrap().unwrap();
        assert_eq!(trends.hours, vec![0, 1]);
        assert_eq!(trends.demand, vec![8.0, 2.0]);
        assert_eq!(trends.supply, vec![8.0, 1.0]);
    }

    #[test]
    fn skips_without_hour_column() {
        let df = df!(
            "demand" => &[5i64],
            "supply" => &[4i64],
        )
        .unwrap();

        assert!(HourlyTrends::compute(&df).unwrap().is_none());
    }

    #[test]
    fn peak_demand_is_the_argmax_hour() {
        let trends = HourlyTrends {
            hours: vec![7, 8, 9],
            demand: vec![10.0, 25.0, 5.0],
            supply: vec![8.0, 9.0, 7.0],
        };
        assert_eq!(trends.peak_demand(), Some((8, 25.0)));
        assert_eq!(trends.undersupplied_hours(), 2);
    }
}

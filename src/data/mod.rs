//! Data module - dataset loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanError, DataCleaner};
pub use loader::{DataLoader, LoaderError};

use polars::prelude::DataFrame;

/// Column names of the ride supply/demand dataset.
pub const DATETIME_COL: &str = "datetime";
pub const DEMAND_COL: &str = "demand";
pub const SUPPLY_COL: &str = "supply";
pub const STATUS_COL: &str = "status";
pub const PICKUP_LATITUDE_COL: &str = "pickup_latitude";
pub const PICKUP_LONGITUDE_COL: &str = "pickup_longitude";

/// Columns derived by the cleaner when `datetime` is present.
pub const HOUR_COL: &str = "hour";
pub const DAY_OF_WEEK_COL: &str = "day_of_week";

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

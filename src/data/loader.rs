//! CSV Data Loader Module
//! Handles dataset loading using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Reads the supply/demand dataset with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load the dataset CSV, or `None` when the file does not exist.
    ///
    /// A missing file is an expected condition and reported with a message;
    /// any other reader fault surfaces as a `LoaderError`.
    pub fn load_csv(path: &str) -> Result<Option<DataFrame>, LoaderError> {
        if !Path::new(path).is_file() {
            warn!("dataset not found at '{path}', check the file path");
            return Ok(None);
        }

        // Lazy scan with bounded schema inference, then collect
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(rows = df.height(), columns = df.width(), "loaded dataset");
        Ok(Some(df))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_absence() {
        let loaded = DataLoader::load_csv("no/such/dataset.csv").unwrap();
        assert!(loaded.is_none());
    }
}

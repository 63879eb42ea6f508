//! Sequential analysis pipeline: load, clean, aggregate.
//! Single-threaded by design; the table is moved stage to stage.

use anyhow::Result;
use tracing::info;

use crate::analysis::{CancellationRates, DemandSupplySummary, HourlyTrends, PickupLocations};
use crate::data::{DataCleaner, DataLoader};

/// Chart-ready results of one pipeline run.
///
/// Each analysis is `None` when it skipped because of a missing optional
/// column; the viewer and the reporter both tolerate any combination.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub hourly: Option<HourlyTrends>,
    pub locations: Option<PickupLocations>,
    pub cancellations: Option<CancellationRates>,
    pub summary: Option<DemandSupplySummary>,
}

impl AnalysisReport {
    pub fn has_charts(&self) -> bool {
        self.hourly.is_some() || self.locations.is_some() || self.cancellations.is_some()
    }
}

/// Outcome of a pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The dataset file was absent; no downstream stage ran.
    MissingDataset,
    Complete(AnalysisReport),
}

pub fn run(path: &str) -> Result<PipelineOutcome> {
    let Some(raw) = DataLoader::load_csv(path)? else {
        return Ok(PipelineOutcome::MissingDataset);
    };

    let cleaned = DataCleaner::clean(raw)?;

    let report = AnalysisReport {
        hourly: HourlyTrends::compute(&cleaned)?,
        locations: PickupLocations::compute(&cleaned)?,
        cancellations: CancellationRates::compute(&cleaned)?,
        summary: DemandSupplySummary::compute(&cleaned)?,
    };

    let charts = [
        report.hourly.is_some(),
        report.locations.is_some(),
        report.cancellations.is_some(),
    ]
    .iter()
    .filter(|produced| **produced)
    .count();
    info!(charts, "analysis complete");

    Ok(PipelineOutcome::Complete(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn missing_dataset_halts_the_pipeline() {
        let outcome = run("no/such/dataset.csv").unwrap();
        assert!(matches!(outcome, PipelineOutcome::MissingDataset));
    }

    #[test]
    fn full_dataset_produces_every_chart() {
        let file = write_dataset(
            "datetime,demand,supply,status,pickup_latitude,pickup_longitude\n\
             2016-01-04 08:30:00,10,8,completed,12.97,77.59\n\
             2016-01-04 08:45:00,12,6,cancelled,12.93,77.61\n\
             2016-01-04 09:10:00,7,7,completed,12.95,77.60\n",
        );

        let outcome = run(file.path().to_str().unwrap()).unwrap();
        let PipelineOutcome::Complete(report) = outcome else {
            panic!("expected a completed pipeline");
        };

        assert!(report.has_charts());
        assert!(report.hourly.is_some());
        assert!(report.locations.is_some());
        assert!(report.cancellations.is_some());
        assert!(report.summary.is_some());

        let trends = report.hourly.unwrap();
        assert_eq!(trends.hours, vec![8, 9]);
        assert_eq!(trends.demand, vec![22.0, 7.0]);
    }

    #[test]
    fn dataset_without_datetime_skips_hour_based_charts() {
        let file = write_dataset(
            "demand,supply,status\n\
             10,8,completed\n\
             12,6,cancelled\n",
        );

        let outcome = run(file.path().to_str().unwrap()).unwrap();
        let PipelineOutcome::Complete(report) = outcome else {
            panic!("expected a completed pipeline");
        };

        assert!(report.hourly.is_none());
        assert!(report.cancellations.is_none());
        assert!(report.locations.is_none());
        assert!(report.summary.is_some());
        assert!(!report.has_charts());
    }
}

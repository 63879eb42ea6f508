//! Ridepulse - Ride-Hailing Supply & Demand Analysis
//!
//! Loads a ride supply/demand dataset, cleans it, shows descriptive charts
//! in an interactive viewer window, and prints a short insights summary.

mod analysis;
mod charts;
mod data;
mod gui;
mod pipeline;
mod report;

use anyhow::anyhow;
use eframe::egui;
use gui::RidepulseApp;
use pipeline::PipelineOutcome;
use tracing_subscriber::EnvFilter;

/// Path to the input dataset. Deliberately a program constant, not a flag.
const DATASET_PATH: &str = "data/ride_supply_demand.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let report = match pipeline::run(DATASET_PATH)? {
        // Absence of the dataset was already reported; nothing left to do.
        PipelineOutcome::MissingDataset => return Ok(()),
        PipelineOutcome::Complete(report) => report,
    };

    if report.has_charts() {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 760.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("Ridepulse"),
            ..Default::default()
        };

        let viewer_report = report.clone();
        eframe::run_native(
            "Ridepulse",
            options,
            Box::new(move |cc| Ok(Box::new(RidepulseApp::new(cc, viewer_report)))),
        )
        .map_err(|e| anyhow!("failed to open chart viewer: {e}"))?;
    }

    report::print_insights(&report);
    Ok(())
}

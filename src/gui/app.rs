//! Ridepulse Main Application
//! Single window hosting the chart viewer.

use crate::gui::ChartViewer;
use crate::pipeline::AnalysisReport;

pub struct RidepulseApp {
    chart_viewer: ChartViewer,
}

impl RidepulseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, report: AnalysisReport) -> Self {
        Self {
            chart_viewer: ChartViewer::new(report),
        }
    }
}

impl eframe::App for RidepulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

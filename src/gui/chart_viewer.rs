//! Chart Viewer Widget
//! Scrollable panel that lays out one card per produced chart, plus the
//! demand/supply summary table.

use egui::{Color32, RichText, ScrollArea};

use crate::analysis::{ColumnSummary, DemandSupplySummary};
use crate::charts::ChartPlotter;
use crate::pipeline::AnalysisReport;

const CARD_SPACING: f32 = 15.0;
const CARD_BORDER: Color32 = Color32::from_rgb(96, 125, 139); // Blue Grey

pub struct ChartViewer {
    report: AnalysisReport,
}

impl ChartViewer {
    pub fn new(report: AnalysisReport) -> Self {
        Self { report }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if !self.report.has_charts() && self.report.summary.is_none() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if let Some(trends) = &self.report.hourly {
                    Self::draw_card(ui, "Hourly Trends of Demand and Supply", |ui| {
                        ChartPlotter::draw_hourly_trends(ui, trends);
                    });
                }
                if let Some(locations) = &self.report.locations {
                    Self::draw_card(ui, "Pickup Locations", |ui| {
                        ChartPlotter::draw_pickup_locations(ui, locations);
                    });
                }
                if let Some(rates) = &self.report.cancellations {
                    Self::draw_card(ui, "Hourly Cancellation Rates", |ui| {
                        ChartPlotter::draw_cancellation_rates(ui, rates);
                    });
                }
                if let Some(summary) = &self.report.summary {
                    Self::draw_card(ui, "Demand & Supply Summary", |ui| {
                        Self::draw_summary_table(ui, summary);
                    });
                }
            });
    }

    fn draw_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, CARD_BORDER))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).size(16.0).strong());
                    ui.add_space(8.0);
                    add_contents(ui);
                });
            });
        ui.add_space(CARD_SPACING);
    }

    fn draw_summary_table(ui: &mut egui::Ui, summary: &DemandSupplySummary) {
        egui::Grid::new("summary_table")
            .striped(true)
            .min_col_width(60.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for header in ["Series", "N", "Mean", "Median", "Std", "P05", "P95"] {
                    ui.label(RichText::new(header).strong().size(11.0));
                }
                ui.end_row();

                for stats in [&summary.demand, &summary.supply] {
                    Self::draw_summary_row(ui, stats);
                }
            });
    }

    fn draw_summary_row(ui: &mut egui::Ui, stats: &ColumnSummary) {
        ui.label(RichText::new(&stats.column).size(11.0));
        ui.label(RichText::new(stats.count.to_string()).size(11.0));
        ui.label(RichText::new(format!("{:.3}", stats.mean)).size(11.0));
        ui.label(RichText::new(format!("{:.3}", stats.median)).size(11.0));
        ui.label(RichText::new(format!("{:.3}", stats.std)).size(11.0));
        ui.label(RichText::new(format!("{:.3}", stats.p05)).size(11.0));
        ui.label(RichText::new(format!("{:.3}", stats.p95)).size(11.0));
        ui.end_row();
    }
}

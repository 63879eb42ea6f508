//! Chart Plotter Module
//! Renders the analysis results as interactive charts using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::analysis::{CancellationRates, HourlyTrends, PickupLocations};

pub const DEMAND_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const SUPPLY_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const CANCELLATION_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const PICKUP_COLOR: Color32 = Color32::from_rgb(155, 89, 182); // Purple

const CHART_HEIGHT: f32 = 300.0;
/// Fixed transparency for the pickup scatter.
const SCATTER_ALPHA: f32 = 0.5;

/// Draws the three dataset charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Line chart of total demand and supply per hour, with point markers.
    pub fn draw_hourly_trends(ui: &mut egui::Ui, trends: &HourlyTrends) {
        let demand: Vec<[f64; 2]> = trends
            .hours
            .iter()
            .zip(&trends.demand)
            .map(|(&hour, &total)| [hour as f64, total])
            .collect();
        let supply: Vec<[f64; 2]> = trends
            .hours
            .iter()
            .zip(&trends.supply)
            .map(|(&hour, &total)| [hour as f64, total])
            .collect();

        Plot::new("hourly_trends")
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .x_axis_label("Hour")
            .y_axis_label("Count")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(demand.iter().copied()))
                        .color(DEMAND_COLOR)
                        .width(2.0)
                        .name("Demand"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(demand.iter().copied()))
                        .radius(3.0)
                        .color(DEMAND_COLOR)
                        .name("Demand"),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(supply.iter().copied()))
                        .color(SUPPLY_COLOR)
                        .width(2.0)
                        .name("Supply"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(supply.iter().copied()))
                        .radius(3.0)
                        .color(SUPPLY_COLOR)
                        .name("Supply"),
                );
            });
    }

    /// Scatter plot of pickup longitude over latitude, one point per row.
    pub fn draw_pickup_locations(ui: &mut egui::Ui, locations: &PickupLocations) {
        let points: Vec<[f64; 2]> = locations
            .latitude
            .iter()
            .zip(&locations.longitude)
            .map(|(&lat, &lon)| [lat, lon])
            .collect();

        Plot::new("pickup_locations")
            .height(CHART_HEIGHT)
            .x_axis_label("Latitude")
            .y_axis_label("Longitude")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(2.0)
                        .color(PICKUP_COLOR.gamma_multiply(SCATTER_ALPHA)),
                );
            });
    }

    /// Bar chart of cancellation rate per hour.
    pub fn draw_cancellation_rates(ui: &mut egui::Ui, rates: &CancellationRates) {
        let bars: Vec<Bar> = rates
            .hours
            .iter()
            .zip(&rates.rates)
            .map(|(&hour, &rate)| Bar::new(hour as f64, rate).width(0.8))
            .collect();

        Plot::new("cancellation_rates")
            .height(CHART_HEIGHT)
            .x_axis_label("Hour")
            .y_axis_label("Cancellation Rate")
            .include_y(0.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(CANCELLATION_COLOR)
                        .name("Cancellation rate"),
                );
            });
    }
}

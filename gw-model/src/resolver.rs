//! Chart/comparison compatibility resolution.
//!
//! A change to either axis always produces a compatible pair. When the
//! proposed value does not fit the current partner, the partner is replaced
//! with the first compatible option in priority order; nothing is rejected.

use crate::chart::{ChartType, ComparisonType};
use crate::metric::Metric;
use log::debug;

/// Outcome of a chart or comparison change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub chart_type: ChartType,
    pub comparison_type: ComparisonType,
    /// `Some` when the metric selection has to be replaced.
    pub metrics: Option<Vec<Metric>>,
}

/// Metric selection used right after entering a comparison type.
pub fn default_metrics(comparison: ComparisonType) -> Vec<Metric> {
    if comparison.is_multi_metric() {
        vec![Metric::Rainfall, Metric::Recharge]
    } else {
        vec![Metric::Rainfall]
    }
}

/// First chart type, in `ChartType::ALL` order, that can show `comparison`.
pub fn first_chart_for(comparison: ComparisonType) -> ChartType {
    ChartType::ALL
        .into_iter()
        .find(|c| c.is_compatible_with(comparison))
        .unwrap_or(ChartType::Bar)
}

/// Resolve a request to switch to `chart`, keeping `comparison` if possible.
///
/// Metrics are only reset when the comparison had to move.
pub fn resolve_chart_change(chart: ChartType, comparison: ComparisonType) -> Resolution {
    if chart.is_compatible_with(comparison) {
        return Resolution {
            chart_type: chart,
            comparison_type: comparison,
            metrics: None,
        };
    }
    let snapped = chart.compatible()[0];
    debug!("chart {chart} does not fit {comparison}, comparison snapped to {snapped}");
    Resolution {
        chart_type: chart,
        comparison_type: snapped,
        metrics: Some(default_metrics(snapped)),
    }
}

/// Resolve a request to switch to `comparison`, keeping `chart` if possible.
///
/// Every comparison change resets the metric selection.
pub fn resolve_comparison_change(comparison: ComparisonType, chart: ChartType) -> Resolution {
    let chart_type = if chart.is_compatible_with(comparison) {
        chart
    } else {
        let snapped = first_chart_for(comparison);
        debug!("comparison {comparison} does not fit {chart}, chart snapped to {snapped}");
        snapped
    };
    Resolution {
        chart_type,
        comparison_type: comparison,
        metrics: Some(default_metrics(comparison)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resolution_is_compatible() {
        for chart in ChartType::ALL {
            for comparison in ComparisonType::ALL {
                let by_chart = resolve_chart_change(chart, comparison);
                assert!(
                    by_chart.chart_type.is_compatible_with(by_chart.comparison_type),
                    "chart change {chart}/{comparison} gave {:?}",
                    by_chart
                );
                assert_eq!(by_chart.chart_type, chart);

                let by_comparison = resolve_comparison_change(comparison, chart);
                assert!(
                    by_comparison
                        .chart_type
                        .is_compatible_with(by_comparison.comparison_type),
                    "comparison change {comparison}/{chart} gave {:?}",
                    by_comparison
                );
                assert_eq!(by_comparison.comparison_type, comparison);
            }
        }
    }

    #[test]
    fn yearly_with_pie_snaps_to_bar() {
        let r = resolve_comparison_change(ComparisonType::Yearly, ChartType::Pie);
        assert_eq!(r.chart_type, ChartType::Bar);
        assert!(r.chart_type.is_compatible_with(ComparisonType::Yearly));
    }

    #[test]
    fn metric_comparison_forces_radar() {
        let r = resolve_comparison_change(ComparisonType::Metric, ChartType::Bar);
        assert_eq!(r.chart_type, ChartType::Radar);
        assert_eq!(r.metrics, Some(vec![Metric::Rainfall, Metric::Recharge]));
    }

    #[test]
    fn compatible_chart_change_keeps_metrics() {
        let r = resolve_chart_change(ChartType::Pie, ComparisonType::District);
        assert_eq!(r.comparison_type, ComparisonType::District);
        assert_eq!(r.metrics, None);
    }

    #[test]
    fn line_chart_moves_comparison_to_yearly() {
        let r = resolve_chart_change(ChartType::Line, ComparisonType::State);
        assert_eq!(r.comparison_type, ComparisonType::Yearly);
        assert_eq!(r.metrics, Some(vec![Metric::Rainfall]));
    }

    #[test]
    fn radar_chart_enters_multi_metric() {
        let r = resolve_chart_change(ChartType::Radar, ComparisonType::Yearly);
        assert_eq!(r.comparison_type, ComparisonType::Metric);
        let metrics = r.metrics.unwrap();
        assert!(metrics.len() > 1);
    }

    #[test]
    fn leaving_metric_yields_one_metric() {
        for comparison in ComparisonType::ALL {
            let r = resolve_comparison_change(comparison, ChartType::Radar);
            let metrics = r.metrics.unwrap();
            if comparison == ComparisonType::Metric {
                assert!(!metrics.is_empty());
            } else {
                assert_eq!(metrics.len(), 1);
            }
        }
    }
}

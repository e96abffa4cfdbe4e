//! Editable state behind the visualization controls.
//!
//! Fields are private so that every edit goes through the resolver; a
//! `Selection` therefore always holds a compatible chart/comparison pair.

use crate::chart::{ChartType, ComparisonType};
use crate::metric::Metric;
use crate::request::VisualizeRequest;
use crate::resolver::{self, Resolution};

/// Current chart configuration chosen by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    chart_type: ChartType,
    comparison_type: ComparisonType,
    metrics: Vec<Metric>,
    states: Vec<String>,
    districts: Vec<String>,
    years: Vec<i32>,
    entity: String,
    year: i32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            comparison_type: ComparisonType::State,
            metrics: vec![Metric::Rainfall],
            states: vec!["Kerala".to_string(), "Karnataka".to_string()],
            districts: vec!["Kottayam".to_string(), "Ernakulam".to_string()],
            years: vec![2023, 2024],
            entity: "Kerala".to_string(),
            year: 2024,
        }
    }
}

fn toggle<T: PartialEq>(list: &mut Vec<T>, item: T, on: bool) {
    if on {
        if !list.contains(&item) {
            list.push(item);
        }
    } else {
        list.retain(|x| *x != item);
    }
}

impl Selection {
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn comparison_type(&self) -> ComparisonType {
        self.comparison_type
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Automatic regeneration only runs for a selection with metrics.
    pub fn is_ready(&self) -> bool {
        !self.metrics.is_empty()
    }

    /// The sole metric of a multi-metric comparison cannot be unchecked;
    /// its control is rendered disabled.
    pub fn is_metric_locked(&self, metric: Metric) -> bool {
        self.comparison_type.is_multi_metric() && self.metrics == [metric]
    }

    fn apply(&mut self, resolution: Resolution) {
        self.chart_type = resolution.chart_type;
        self.comparison_type = resolution.comparison_type;
        if let Some(metrics) = resolution.metrics {
            self.metrics = metrics;
        }
    }

    pub fn set_chart_type(&mut self, chart: ChartType) {
        let resolution = resolver::resolve_chart_change(chart, self.comparison_type);
        self.apply(resolution);
    }

    pub fn set_comparison_type(&mut self, comparison: ComparisonType) {
        let resolution = resolver::resolve_comparison_change(comparison, self.chart_type);
        self.apply(resolution);
    }

    /// React to a metric control. Radio semantics outside of multi-metric
    /// comparisons; checkbox semantics inside, where the last metric stays.
    pub fn choose_metric(&mut self, metric: Metric, checked: bool) {
        if !self.comparison_type.is_multi_metric() {
            if checked {
                self.metrics = vec![metric];
            }
            return;
        }
        if !checked && self.is_metric_locked(metric) {
            return;
        }
        toggle(&mut self.metrics, metric, checked);
    }

    pub fn toggle_state(&mut self, state: &str, checked: bool) {
        toggle(&mut self.states, state.to_string(), checked);
    }

    pub fn toggle_district(&mut self, district: &str, checked: bool) {
        toggle(&mut self.districts, district.to_string(), checked);
    }

    pub fn toggle_year(&mut self, year: i32, checked: bool) {
        toggle(&mut self.years, year, checked);
    }

    pub fn set_entity(&mut self, entity: impl Into<String>) {
        self.entity = entity.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn to_request(&self) -> VisualizeRequest {
        VisualizeRequest::from_selection(self)
    }
}

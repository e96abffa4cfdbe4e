use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart kinds the backend can prepare data for.
///
/// The declaration order is also the priority order used when a chart type
/// has to be picked for a comparison type.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
}

/// The axis the backend aggregates along.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonType {
    State,
    District,
    Yearly,
    Metric,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Radar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Radar => "radar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar Chart",
            ChartType::Line => "Line Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Doughnut => "Doughnut Chart",
            ChartType::Radar => "Radar Chart",
        }
    }

    /// Comparison types this chart can display, first entry preferred.
    pub fn compatible(&self) -> &'static [ComparisonType] {
        match self {
            ChartType::Bar => &[
                ComparisonType::State,
                ComparisonType::District,
                ComparisonType::Yearly,
            ],
            ChartType::Line => &[ComparisonType::Yearly],
            ChartType::Pie | ChartType::Doughnut => {
                &[ComparisonType::State, ComparisonType::District]
            }
            ChartType::Radar => &[ComparisonType::Metric],
        }
    }

    pub fn is_compatible_with(&self, comparison: ComparisonType) -> bool {
        self.compatible().contains(&comparison)
    }
}

impl ComparisonType {
    pub const ALL: [ComparisonType; 4] = [
        ComparisonType::State,
        ComparisonType::District,
        ComparisonType::Yearly,
        ComparisonType::Metric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonType::State => "state",
            ComparisonType::District => "district",
            ComparisonType::Yearly => "yearly",
            ComparisonType::Metric => "metric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonType::State => "State Comparison",
            ComparisonType::District => "District Comparison",
            ComparisonType::Yearly => "Yearly Trends",
            ComparisonType::Metric => "Multi-Metric",
        }
    }

    /// Whether the metric control allows more than one selection.
    pub fn is_multi_metric(&self) -> bool {
        matches!(self, ComparisonType::Metric)
    }

    /// Whether requests for this axis carry a `filters.year`.
    pub fn uses_year_filter(&self) -> bool {
        !matches!(self, ComparisonType::Yearly)
    }

    /// Whether requests for this axis carry `filters.entity` / `entity_type`.
    pub fn uses_entity_filter(&self) -> bool {
        matches!(self, ComparisonType::Yearly | ComparisonType::Metric)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownChartType(s.to_string()))
    }
}

impl FromStr for ComparisonType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonType::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownComparisonType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_comparison_has_a_chart() {
        for comparison in ComparisonType::ALL {
            assert!(
                ChartType::ALL.iter().any(|c| c.is_compatible_with(comparison)),
                "{comparison} has no compatible chart"
            );
        }
    }

    #[test]
    fn line_only_fits_yearly() {
        assert_eq!(ChartType::Line.compatible(), &[ComparisonType::Yearly]);
        assert!(!ChartType::Pie.is_compatible_with(ComparisonType::Yearly));
        assert!(ChartType::Radar.is_compatible_with(ComparisonType::Metric));
    }

    #[test]
    fn parses_select_values() {
        assert_eq!("doughnut".parse::<ChartType>().unwrap(), ChartType::Doughnut);
        assert_eq!(
            "yearly".parse::<ComparisonType>().unwrap(),
            ComparisonType::Yearly
        );
        assert_eq!(
            "scatter".parse::<ChartType>(),
            Err(ModelError::UnknownChartType("scatter".to_string()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChartType::Radar).unwrap(), "\"radar\"");
        assert_eq!(
            serde_json::to_string(&ComparisonType::District).unwrap(),
            "\"district\""
        );
    }

    #[test]
    fn filter_requirements_follow_axis() {
        assert!(ComparisonType::State.uses_year_filter());
        assert!(!ComparisonType::Yearly.uses_year_filter());
        assert!(ComparisonType::Metric.uses_year_filter());
        assert!(ComparisonType::Metric.uses_entity_filter());
        assert!(!ComparisonType::District.uses_entity_filter());
    }
}

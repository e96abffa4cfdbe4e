use thiserror::Error;

/// Errors raised while parsing model values from UI strings or fixtures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown chart type: {0}")]
    UnknownChartType(String),
    #[error("unknown comparison type: {0}")]
    UnknownComparisonType(String),
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("unknown user role: {0}")]
    UnknownRole(String),
    #[error("catalog parse failed: {0}")]
    Catalog(String),
}

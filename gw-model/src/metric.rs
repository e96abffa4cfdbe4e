use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A groundwater quantity the backend can aggregate.
///
/// Rainfall is reported in millimetres; the groundwater quantities are in
/// hectare-metres (ham), the unit used by the assessment reports.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Rainfall,
    Recharge,
    Draft,
    Availability,
    Groundwater,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Rainfall,
        Metric::Recharge,
        Metric::Draft,
        Metric::Availability,
        Metric::Groundwater,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Rainfall => "rainfall",
            Metric::Recharge => "recharge",
            Metric::Draft => "draft",
            Metric::Availability => "availability",
            Metric::Groundwater => "groundwater",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Rainfall => "Rainfall",
            Metric::Recharge => "Groundwater Recharge",
            Metric::Draft => "Groundwater Draft",
            Metric::Availability => "Water Availability",
            Metric::Groundwater => "Groundwater Resources",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Rainfall => "mm",
            _ => "ham",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownMetric(s.to_string()))
    }
}

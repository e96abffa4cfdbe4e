use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Audience the chat backend tailors its answers to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Farmer,
    Policymaker,
    Researcher,
    General,
}

/// Canned prompts offered before the user starts typing.
pub const QUICK_QUERIES: [&str; 8] = [
    "Show groundwater levels in Karnataka",
    "Critical blocks in Maharashtra",
    "Historical data for Tamil Nadu",
    "Recharge estimation methodology",
    "Over-exploited areas in Punjab",
    "Groundwater quality assessment",
    "Groundwater quality in Kerala",
    "Current assessment in Rajasthan",
];

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Farmer,
        UserRole::Policymaker,
        UserRole::Researcher,
        UserRole::General,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UserRole::Farmer => "farmer",
            UserRole::Policymaker => "policymaker",
            UserRole::Researcher => "researcher",
            UserRole::General => "general",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Farmer => "Farmer",
            UserRole::Policymaker => "Policymaker",
            UserRole::Researcher => "Researcher",
            UserRole::General => "General User",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UserRole::Farmer => "🌾",
            UserRole::Policymaker => "🏛️",
            UserRole::Researcher => "🔬",
            UserRole::General => "👤",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Farmer => "Practical recommendations for agricultural water management",
            UserRole::Policymaker => "Policy insights and governance recommendations",
            UserRole::Researcher => "Detailed data and technical analysis",
            UserRole::General => "General information and basic insights",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            UserRole::Farmer => {
                "Get actionable insights for crop planning, irrigation guidance, and well management"
            }
            UserRole::Policymaker => {
                "Access policy-relevant data, regulatory insights, and governance recommendations"
            }
            UserRole::Researcher => {
                "Comprehensive datasets, methodologies, and detailed technical analysis"
            }
            UserRole::General => "Easy-to-understand information about groundwater resources",
        }
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.id() == s.trim())
            .ok_or_else(|| ModelError::UnknownRole(s.to_string()))
    }
}

//! Request bodies sent to the groundwater backend.

use crate::chart::{ChartType, ComparisonType};
use crate::metric::Metric;
use crate::role::UserRole;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// The only entity type the front end queries by.
pub const ENTITY_TYPE_STATE: &str = "state";

/// Body of `POST /visualize`.
///
/// Only the list field matching `comparison_type` is present; the others are
/// omitted from the JSON entirely rather than sent empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizeRequest {
    pub chart_type: ChartType,
    pub comparison_type: ComparisonType,
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<i32>>,
    pub filters: Filters,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

impl VisualizeRequest {
    pub fn from_selection(selection: &Selection) -> Self {
        let comparison = selection.comparison_type();
        let mut request = VisualizeRequest {
            chart_type: selection.chart_type(),
            comparison_type: comparison,
            metrics: selection.metrics().to_vec(),
            states: None,
            districts: None,
            years: None,
            filters: Filters::default(),
        };

        match comparison {
            ComparisonType::State => request.states = Some(selection.states().to_vec()),
            ComparisonType::District => {
                request.districts = Some(selection.districts().to_vec())
            }
            ComparisonType::Yearly => request.years = Some(selection.years().to_vec()),
            ComparisonType::Metric => {}
        }
        if comparison.uses_year_filter() {
            request.filters.year = Some(selection.year());
        }
        if comparison.uses_entity_filter() {
            request.filters.entity = Some(selection.entity().to_string());
            request.filters.entity_type = Some(ENTITY_TYPE_STATE.to_string());
        }
        request
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub role: String,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>, role: Option<UserRole>) -> Self {
        Self {
            query: query.into(),
            role: role.unwrap_or(UserRole::General).id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn state_request_carries_states_and_year() {
        let request = Selection::default().to_request();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "chart_type": "bar",
                "comparison_type": "state",
                "metrics": ["rainfall"],
                "states": ["Kerala", "Karnataka"],
                "filters": { "year": 2024 }
            })
        );
    }

    #[test]
    fn district_request_omits_states() {
        let mut selection = Selection::default();
        selection.set_comparison_type(ComparisonType::District);
        let value = serde_json::to_value(selection.to_request()).unwrap();
        assert!(value.get("states").is_none());
        assert!(value.get("years").is_none());
        assert_eq!(value["districts"], json!(["Kottayam", "Ernakulam"]));
        assert_eq!(value["filters"], json!({ "year": 2024 }));
    }

    #[test]
    fn yearly_request_uses_entity_not_year() {
        let mut selection = Selection::default();
        selection.set_comparison_type(ComparisonType::Yearly);
        selection.set_entity("Punjab");
        let request = selection.to_request();
        assert_eq!(request.years, Some(vec![2023, 2024]));
        assert_eq!(request.states, None);
        assert_eq!(request.districts, None);
        assert_eq!(
            request.filters,
            Filters {
                year: None,
                entity: Some("Punjab".to_string()),
                entity_type: Some("state".to_string()),
            }
        );
    }

    #[test]
    fn metric_request_has_no_list_field() {
        let mut selection = Selection::default();
        selection.set_comparison_type(ComparisonType::Metric);
        selection.set_year(2023);
        let value = serde_json::to_value(selection.to_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "chart_type": "radar",
                "comparison_type": "metric",
                "metrics": ["rainfall", "recharge"],
                "filters": { "year": 2023, "entity": "Kerala", "entity_type": "state" }
            })
        );
    }

    #[test]
    fn irrelevant_fields_never_leak() {
        let mut selection = Selection::default();
        for comparison in ComparisonType::ALL {
            selection.set_comparison_type(comparison);
            let r = selection.to_request();
            assert_eq!(r.states.is_some(), comparison == ComparisonType::State);
            assert_eq!(r.districts.is_some(), comparison == ComparisonType::District);
            assert_eq!(r.years.is_some(), comparison == ComparisonType::Yearly);
            assert_eq!(r.filters.year.is_some(), comparison.uses_year_filter());
            assert_eq!(r.filters.entity.is_some(), comparison.uses_entity_filter());
        }
    }

    #[test]
    fn chat_role_defaults_to_general() {
        let request = ChatRequest::new("Critical blocks in Maharashtra", None);
        assert_eq!(request.role, "general");
        let request = ChatRequest::new("q", Some(UserRole::Farmer));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "q", "role": "farmer" })
        );
    }
}

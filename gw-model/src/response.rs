//! Response bodies returned by the groundwater backend.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Body of `GET /visualization/options`. Missing lists decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationOptions {
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default)]
    pub districts: Vec<String>,
    #[serde(default)]
    pub years: Vec<i32>,
}

/// Raw body of `POST /visualize`: either chart data or an `error`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VisualizeResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub metadata: Option<ChartMetadata>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    #[serde(default)]
    pub data_points: u64,
    #[serde(default)]
    pub query_used: Option<String>,
}

/// A successful visualization result, ready to hand to Chart.js.
///
/// `data` is the backend's chart config: `{ "data": {...}, "options": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub data: Value,
    pub metadata: ChartMetadata,
    pub processing_time: f64,
}

impl VisualizeResponse {
    /// Split into the payload or the backend-reported error message.
    pub fn into_payload(self) -> Result<ChartPayload, String> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(ChartPayload {
            data: self.data.unwrap_or(Value::Null),
            metadata: self.metadata.unwrap_or_default(),
            processing_time: self.processing_time.unwrap_or(0.0),
        })
    }
}

impl ChartPayload {
    /// Whether there is anything to draw.
    pub fn has_chart(&self) -> bool {
        !self.data.is_null()
    }

    /// The Chart.js `data` block (labels and datasets).
    pub fn chart_data(&self) -> Value {
        self.data.get("data").cloned().unwrap_or_else(|| json!({}))
    }

    /// Backend options overlaid with the sizing and animation the view needs.
    pub fn render_options(&self) -> Value {
        let mut options = match self.data.get("options") {
            Some(Value::Object(map)) => map.clone(),
            _ => serde_json::Map::new(),
        };
        options.insert("responsive".to_string(), Value::Bool(true));
        options.insert("maintainAspectRatio".to_string(), Value::Bool(false));
        options.insert(
            "animation".to_string(),
            json!({ "duration": 1000, "easing": "easeInOutCubic" }),
        );
        Value::Object(options)
    }
}

/// Body of a `POST /chat` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub final_answer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_becomes_err() {
        let body: VisualizeResponse =
            serde_json::from_str(r#"{"error": "No data for Goa in 2023"}"#).unwrap();
        assert_eq!(body.into_payload(), Err("No data for Goa in 2023".to_string()));
    }

    #[test]
    fn data_body_becomes_payload() {
        let body: VisualizeResponse = serde_json::from_value(json!({
            "data": { "data": { "labels": ["Kerala"], "datasets": [] }, "options": {} },
            "metadata": { "data_points": 2, "query_used": "MATCH (s:State) RETURN s" },
            "processing_time": 0.42
        }))
        .unwrap();
        let payload = body.into_payload().unwrap();
        assert!(payload.has_chart());
        assert_eq!(payload.metadata.data_points, 2);
        assert_eq!(payload.processing_time, 0.42);
        assert_eq!(payload.chart_data()["labels"], json!(["Kerala"]));
    }

    #[test]
    fn render_options_override_backend_sizing() {
        let payload = ChartPayload {
            data: json!({
                "data": {},
                "options": { "responsive": false, "plugins": { "title": { "text": "Rainfall" } } }
            }),
            metadata: ChartMetadata::default(),
            processing_time: 0.0,
        };
        let options = payload.render_options();
        assert_eq!(options["responsive"], json!(true));
        assert_eq!(options["maintainAspectRatio"], json!(false));
        assert_eq!(options["animation"]["easing"], json!("easeInOutCubic"));
        assert_eq!(options["plugins"]["title"]["text"], json!("Rainfall"));
    }

    #[test]
    fn options_tolerate_missing_lists() {
        let options: VisualizationOptions =
            serde_json::from_str(r#"{"states": ["Kerala"]}"#).unwrap();
        assert_eq!(options.states, vec!["Kerala".to_string()]);
        assert!(options.districts.is_empty());
        assert!(options.years.is_empty());
    }
}

use serde_json::Value;
use thiserror::Error;

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with FastAPI's `detail` when the body had one.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// 2xx response whose body reported `error`.
    #[error("{0}")]
    Backend(String),
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Pull a readable `detail` out of an error body.
///
/// FastAPI sends a string for `HTTPException` and a list of objects for
/// validation failures; the list is flattened to its `msg` fields.
pub fn detail_from_body(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_detail() {
        let body = json!({ "detail": "Unsupported chart type" });
        assert_eq!(detail_from_body(&body).as_deref(), Some("Unsupported chart type"));
    }

    #[test]
    fn validation_detail_is_flattened() {
        let body = json!({ "detail": [
            { "loc": ["body", "metrics"], "msg": "field required" },
            { "loc": ["body", "filters"], "msg": "value is not a valid dict" }
        ]});
        assert_eq!(
            detail_from_body(&body).as_deref(),
            Some("field required; value is not a valid dict")
        );
    }

    #[test]
    fn missing_or_blank_detail() {
        assert_eq!(detail_from_body(&json!({})), None);
        assert_eq!(detail_from_body(&json!({ "detail": "  " })), None);
        assert_eq!(detail_from_body(&json!({ "detail": 42 })), None);
    }
}

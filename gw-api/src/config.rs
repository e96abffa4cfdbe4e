//! Backend location.
//!
//! Resolution order: a `window.GROUNDWATER_API_BASE` global set by the host
//! page, then `GROUNDWATER_API_URL` at compile time, then localhost.

use log::info;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Name of the JS global that overrides the base URL at runtime.
pub const API_BASE_GLOBAL: &str = "GROUNDWATER_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    use wasm_bindgen::JsValue;
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(API_BASE_GLOBAL))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    None
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let config = runtime_override()
            .and_then(non_blank)
            .or_else(|| option_env!("GROUNDWATER_API_URL").map(String::from).and_then(non_blank))
            .map(Self::new)
            .unwrap_or_default();
        info!("groundwater API at {}", config.base_url);
        config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://ingres.example.org/api/ ");
        assert_eq!(config.base_url(), "https://ingres.example.org/api");
        assert_eq!(
            config.endpoint("/visualize"),
            "https://ingres.example.org/api/visualize"
        );
    }

    #[test]
    fn default_points_at_localhost() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("chat"), "http://localhost:8000/chat");
    }
}

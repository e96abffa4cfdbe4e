//! `reqwest` implementation of [`Backend`].

use crate::error::detail_from_body;
use crate::{ApiConfig, ApiError, Backend, CHAT_PATH, OPTIONS_PATH, VISUALIZE_PATH};
use gw_model::request::{ChatRequest, VisualizeRequest};
use gw_model::response::{ChartPayload, ChatResponse, VisualizationOptions, VisualizeResponse};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Cheaply cloneable handle to the groundwater backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

/// Turn a status code and raw body into JSON, or the matching error.
///
/// Non-2xx responses become `ApiError::Status` whether or not the body is
/// JSON; a 2xx body that is not JSON is a decode failure.
pub fn decode_body(status: u16, text: &str) -> Result<Value, ApiError> {
    let body = serde_json::from_str::<Value>(text);
    if !(200..300).contains(&status) {
        let detail = body.ok().as_ref().and_then(detail_from_body);
        return Err(ApiError::Status { status, detail });
    }
    Ok(body?)
}

fn decode_as<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    let body = decode_body(status, text)?;
    Ok(serde_json::from_value(body)?)
}

/// Decode a `/visualize` response, lifting a body `error` into `ApiError::Backend`.
pub fn decode_visualize(status: u16, text: &str) -> Result<ChartPayload, ApiError> {
    let response: VisualizeResponse = decode_as(status, text)?;
    response.into_payload().map_err(ApiError::Backend)
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn read(response: reqwest::Response) -> Result<(u16, String), ApiError> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        if !(200..300).contains(&status) {
            warn!("backend answered {status}");
        }
        Ok((status, text))
    }
}

impl Backend for ApiClient {
    async fn options(&self) -> Result<VisualizationOptions, ApiError> {
        let url = self.config.endpoint(OPTIONS_PATH);
        debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let (status, text) = Self::read(response).await?;
        decode_as(status, &text)
    }

    async fn visualize(&self, request: &VisualizeRequest) -> Result<ChartPayload, ApiError> {
        let url = self.config.endpoint(VISUALIZE_PATH);
        debug!(
            "POST {url} ({} / {})",
            request.chart_type, request.comparison_type
        );
        let response = self.http.post(&url).json(request).send().await?;
        let (status, text) = Self::read(response).await?;
        decode_visualize(status, &text)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.config.endpoint(CHAT_PATH);
        debug!("POST {url} as {}", request.role);
        let response = self.http.post(&url).json(request).send().await?;
        let (status, text) = Self::read(response).await?;
        decode_as(status, &text)
    }
}

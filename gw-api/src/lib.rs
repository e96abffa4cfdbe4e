//! HTTP client and request flows for the groundwater backend.
//!
//! The `Backend` trait is the seam between the views and the network:
//! `ApiClient` implements it with `reqwest` (which uses `fetch` when built
//! for WASM), and the flows in `chat` and `visualize` are generic over it and
//! over the `Store` holding their state, so the views and the native tests
//! run the same code.

pub mod chat;
pub mod client;
pub mod config;
pub mod debounce;
pub mod error;
pub mod store;
pub mod visualize;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use debounce::Debouncer;
pub use error::ApiError;
pub use store::Store;

use gw_model::request::{ChatRequest, VisualizeRequest};
use gw_model::response::{ChartPayload, ChatResponse, VisualizationOptions};

pub const OPTIONS_PATH: &str = "/visualization/options";
pub const VISUALIZE_PATH: &str = "/visualize";
pub const CHAT_PATH: &str = "/chat";

/// The three backend endpoints the front end consumes.
///
/// Futures are not required to be `Send`; everything runs on the browser's
/// single thread.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /visualization/options`
    async fn options(&self) -> Result<VisualizationOptions, ApiError>;

    /// `POST /visualize`. A body carrying `error` comes back as
    /// `ApiError::Backend`.
    async fn visualize(&self, request: &VisualizeRequest) -> Result<ChartPayload, ApiError>;

    /// `POST /chat`
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

#[cfg(test)]
mod mock;

//! In-memory backend for exercising the request flows.

use crate::{ApiError, Backend};
use gw_model::request::{ChatRequest, VisualizeRequest};
use gw_model::response::{ChartPayload, ChatResponse, VisualizationOptions};
use std::cell::{Cell, RefCell};
use std::time::Duration;

#[derive(Default)]
pub struct MockBackend {
    pub options: RefCell<Option<Result<VisualizationOptions, ApiError>>>,
    pub visualize: RefCell<Vec<Result<ChartPayload, ApiError>>>,
    pub chat: RefCell<Option<Result<ChatResponse, ApiError>>>,
    pub calls: Cell<usize>,
    /// How long `/visualize` takes to answer
    pub latency: Cell<Duration>,
    pub last_visualize: RefCell<Option<VisualizeRequest>>,
    pub last_chat: RefCell<Option<ChatRequest>>,
}

impl MockBackend {
    /// Queue `/visualize` answers, served in order.
    pub fn with_visualize(results: Vec<Result<ChartPayload, ApiError>>) -> Self {
        Self {
            visualize: RefCell::new(results),
            ..Self::default()
        }
    }

    pub fn with_chat(result: Result<ChatResponse, ApiError>) -> Self {
        Self {
            chat: RefCell::new(Some(result)),
            ..Self::default()
        }
    }
}

impl Backend for MockBackend {
    async fn options(&self) -> Result<VisualizationOptions, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.options
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Network("no options queued".to_string())))
    }

    async fn visualize(&self, request: &VisualizeRequest) -> Result<ChartPayload, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_visualize.borrow_mut() = Some(request.clone());
        let result = {
            let mut queue = self.visualize.borrow_mut();
            if queue.is_empty() {
                Err(ApiError::Network("no visualization queued".to_string()))
            } else {
                queue.remove(0)
            }
        };
        let latency = self.latency.get();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        result
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_chat.borrow_mut() = Some(request.clone());
        self.chat
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ApiError::Network("no chat answer queued".to_string())))
    }
}

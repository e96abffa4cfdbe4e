//! Visualization request flow and the state the chart panel renders from.

use crate::store::Store;
use crate::{ApiError, Backend};
use gw_model::request::VisualizeRequest;
use gw_model::response::{ChartPayload, VisualizationOptions};
use log::{info, warn};

/// Quiet period after the last parameter change before regenerating.
pub const REGENERATE_DEBOUNCE_MS: u32 = 500;

pub const GENERIC_FAILURE: &str =
    "Failed to generate visualization. Please check your connection and try again.";

/// Shown for a non-2xx response that carried no `detail`.
pub const STATUS_FAILURE: &str = "Failed to generate visualization";

/// User-facing text for a failed `/visualize` call.
pub fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Backend(message) if !message.trim().is_empty() => message.clone(),
        ApiError::Status {
            detail: Some(detail),
            ..
        } => detail.clone(),
        ApiError::Status { detail: None, .. } => STATUS_FAILURE.to_string(),
        _ => GENERIC_FAILURE.to_string(),
    }
}

/// What the chart area should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    Loading,
    Error(&'a str),
    Chart(&'a ChartPayload),
    Empty,
}

/// Result of the most recent generation attempts.
///
/// A failure sets `error` but leaves `payload` alone, so the previous chart
/// comes back as soon as a retry succeeds. Overlapping requests are all
/// counted; the view stays loading until the last of them has answered, and
/// whichever answers last decides what is shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualizationState {
    pub payload: Option<ChartPayload>,
    pub error: Option<String>,
    in_flight: usize,
}

impl VisualizationState {
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<ChartPayload, ApiError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(payload) => {
                info!(
                    "visualization ready: {} data points in {}s",
                    payload.metadata.data_points, payload.processing_time
                );
                self.payload = Some(payload);
                self.error = None;
            }
            Err(e) => {
                warn!("visualization failed: {e}");
                self.error = Some(failure_message(&e));
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn panel(&self) -> Panel<'_> {
        if self.is_loading() {
            return Panel::Loading;
        }
        if let Some(error) = &self.error {
            return Panel::Error(error);
        }
        match &self.payload {
            Some(payload) if payload.has_chart() => Panel::Chart(payload),
            _ => Panel::Empty,
        }
    }
}

/// Issue one `/visualize` call and record the outcome in `state`.
pub async fn regenerate<B, S>(backend: &B, request: &VisualizeRequest, mut state: S)
where
    B: Backend,
    S: Store<VisualizationState>,
{
    info!(
        "generating {} chart for {} comparison",
        request.chart_type, request.comparison_type
    );
    state.update(VisualizationState::begin);
    let result = backend.visualize(request).await;
    state.update(|s| s.finish(result));
}

/// Fetch filter options; `None` means the backend is unreachable and the
/// fallback catalog stays in use.
pub async fn load_options<B: Backend>(backend: &B) -> Option<VisualizationOptions> {
    match backend.options().await {
        Ok(options) => Some(options),
        Err(e) => {
            warn!("visualization options unavailable, using fallback data: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;
    use gw_model::chart::ComparisonType;
    use gw_model::response::ChartMetadata;
    use gw_model::selection::Selection;
    use serde_json::json;

    fn payload(points: u64) -> ChartPayload {
        ChartPayload {
            data: json!({ "data": { "labels": ["Kerala", "Karnataka"] }, "options": {} }),
            metadata: ChartMetadata {
                data_points: points,
                query_used: None,
            },
            processing_time: 0.2,
        }
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            failure_message(&ApiError::Backend("No data for 2019".to_string())),
            "No data for 2019"
        );
        assert_eq!(
            failure_message(&ApiError::Status {
                status: 500,
                detail: Some("Neo4j unavailable".to_string())
            }),
            "Neo4j unavailable"
        );
        assert_eq!(
            failure_message(&ApiError::Status {
                status: 500,
                detail: None
            }),
            STATUS_FAILURE
        );
        assert_eq!(
            failure_message(&ApiError::Network("Failed to fetch".to_string())),
            GENERIC_FAILURE
        );
        assert_eq!(
            failure_message(&ApiError::Backend(String::new())),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn panel_precedence() {
        let mut state = VisualizationState::default();
        assert_eq!(state.panel(), Panel::Empty);

        state.begin();
        assert_eq!(state.panel(), Panel::Loading);

        state.finish(Ok(payload(2)));
        assert!(matches!(state.panel(), Panel::Chart(p) if p.metadata.data_points == 2));

        state.finish(Err(ApiError::Backend("boom".to_string())));
        assert_eq!(state.panel(), Panel::Error("boom"));
    }

    #[test]
    fn overlapping_requests_stay_loading_until_last_answer() {
        let mut state = VisualizationState::default();
        state.begin();
        state.begin();

        state.finish(Ok(payload(3)));
        assert!(state.is_loading());
        assert_eq!(state.panel(), Panel::Loading);

        state.finish(Ok(payload(5)));
        assert!(!state.is_loading());
        assert!(matches!(state.panel(), Panel::Chart(p) if p.metadata.data_points == 5));

        // a stray extra answer never underflows
        state.finish(Err(ApiError::Backend("late".to_string())));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn failed_call_keeps_prior_chart() {
        let backend = MockBackend::with_visualize(vec![
            Ok(payload(4)),
            Err(ApiError::Backend("No data for Goa".to_string())),
            Ok(payload(6)),
        ]);
        let request = Selection::default().to_request();
        let mut state = VisualizationState::default();

        regenerate(&backend, &request, &mut state).await;
        assert_eq!(state.payload.as_ref().unwrap().metadata.data_points, 4);

        regenerate(&backend, &request, &mut state).await;
        assert_eq!(state.error.as_deref(), Some("No data for Goa"));
        assert_eq!(state.payload.as_ref().unwrap().metadata.data_points, 4);
        assert!(!state.is_loading());

        // retry
        regenerate(&backend, &request, &mut state).await;
        assert_eq!(state.error, None);
        assert_eq!(state.payload.as_ref().unwrap().metadata.data_points, 6);
        assert_eq!(backend.calls.get(), 3);
    }

    #[tokio::test]
    async fn network_failure_shows_generic_message() {
        let backend = MockBackend::default();
        let mut state = VisualizationState::default();
        regenerate(&backend, &Selection::default().to_request(), &mut state).await;
        assert_eq!(state.error.as_deref(), Some(GENERIC_FAILURE));
        assert_eq!(state.payload, None);
    }

    #[tokio::test]
    async fn request_follows_selection() {
        let backend = MockBackend::with_visualize(vec![Ok(payload(1))]);
        let mut selection = Selection::default();
        selection.set_comparison_type(ComparisonType::District);
        let mut state = VisualizationState::default();

        regenerate(&backend, &selection.to_request(), &mut state).await;

        let sent = backend.last_visualize.borrow().clone().unwrap();
        assert_eq!(sent.comparison_type, ComparisonType::District);
        assert!(sent.states.is_none());
        assert_eq!(sent.districts.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn options_failure_falls_back() {
        let backend = MockBackend::default();
        assert_eq!(load_options(&backend).await, None);

        let backend = MockBackend::default();
        *backend.options.borrow_mut() = Some(Ok(VisualizationOptions {
            states: vec!["Kerala".to_string()],
            ..VisualizationOptions::default()
        }));
        let options = load_options(&backend).await.unwrap();
        assert_eq!(options.states, vec!["Kerala".to_string()]);
    }
}

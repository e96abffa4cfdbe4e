//! Visualization view.
//!
//! Every selection change restarts a 500ms timer; when it fires, one
//! `/visualize` request goes out. A newer change only supersedes the timer,
//! never a request that is already in flight.

use crate::View;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use gw_api::visualize::{Panel, REGENERATE_DEBOUNCE_MS};
use gw_api::{ApiClient, Debouncer};
use gw_chart_ui::actions::{fetch_options, generate_visualization};
use gw_chart_ui::components::{
    AnalysisSummary, AxisFilters, BackendStatus, ChartContainer, ChartHeader, ChartTypePicker,
    ComparisonSelector, ErrorDisplay, LoadingSpinner, MetricSelector,
};
use gw_chart_ui::js_bridge;
use gw_chart_ui::state::VisualizationContext;
use log::{debug, error};

/// Chart container DOM element ID used by Chart.js to render into.
const CHART_ID: &str = "groundwater-chart";

const BACKEND_HINT: &str = "Make sure the backend server is running on port 8000";

#[component]
pub fn VisualizationView() -> Element {
    let viz = use_context_provider(VisualizationContext::new);
    let mut view = use_context::<Signal<View>>();
    let client = use_context::<ApiClient>();
    let debouncer = use_hook(Debouncer::default);

    use_hook({
        let client = client.clone();
        move || fetch_options(viz, client)
    });

    // Debounced regeneration
    use_effect({
        let client = client.clone();
        move || {
            let ready = viz.selection.read().is_ready();
            // supersedes the pending timer even when nothing is sent
            let wait = debouncer.schedule(TimeoutFuture::new(REGENERATE_DEBOUNCE_MS));
            if !ready {
                debug!("selection incomplete, not regenerating");
                return;
            }
            let client = client.clone();
            spawn(async move {
                if wait.await {
                    generate_visualization(viz, client);
                }
            });
        }
    });

    use_effect(move || {
        let chart = viz.chart.read();
        if let Panel::Chart(payload) = chart.panel() {
            let chart_type = viz.selection.peek().chart_type();
            js_bridge::init_charts();
            js_bridge::render_chart(CHART_ID, chart_type, payload);
        }
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    let chart = viz.chart.read().clone();
    let selection = viz.selection.read().clone();
    let show_filters = (viz.show_filters)();

    let refresh = {
        let client = client.clone();
        move |_: MouseEvent| generate_visualization(viz, client.clone())
    };
    let retry = {
        let client = client.clone();
        move |_: ()| generate_visualization(viz, client.clone())
    };
    let export = move |_: MouseEvent| {
        if let Err(e) = js_bridge::export_png(CHART_ID, &js_bridge::export_file_name()) {
            error!("chart export failed: {e:#}");
        }
    };
    let toggle_filters = {
        let mut show = viz.show_filters;
        move |_: MouseEvent| show.set(!show_filters)
    };

    let body = match chart.panel() {
        Panel::Loading => rsx! {
            LoadingSpinner { message: "Generating visualization...".to_string() }
        },
        Panel::Error(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                title: "Visualization Error".to_string(),
                on_retry: retry,
                hint: BACKEND_HINT.to_string(),
            }
        },
        Panel::Chart(payload) => rsx! {
            ChartContainer { id: CHART_ID.to_string() }
            AnalysisSummary {
                payload: payload.clone(),
                chart_type: selection.chart_type(),
                comparison_type: selection.comparison_type(),
                metric_count: selection.metrics().len(),
            }
        },
        Panel::Empty => rsx! {
            div {
                style: "text-align: center; padding: 64px 16px; color: #6B7280;",
                div { style: "font-size: 48px;", "📊" }
                h3 { style: "color: #111827;", "Ready to Visualize" }
                p { "Select your parameters and the chart will be generated automatically." }
            }
        },
    };

    let button_style = "padding: 8px 14px; border: 1px solid #D1D5DB; background: white; border-radius: 6px; cursor: pointer;";

    rsx! {
        div {
            style: "padding: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; flex-wrap: wrap; gap: 8px;",
                ChartHeader {
                    title: "Groundwater Data Visualization".to_string(),
                    subtitle: "Compare rainfall, recharge, extraction and availability across India".to_string(),
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button { style: "{button_style}", onclick: move |_| view.set(View::Chat), "← Back to Chat" }
                    button { style: "{button_style}", onclick: toggle_filters, if show_filters { "Hide Filters" } else { "Show Filters" } }
                    button { style: "{button_style}", disabled: chart.is_loading(), onclick: refresh, "🔄 Refresh" }
                    button { style: "{button_style}", disabled: chart.payload.is_none(), onclick: export, "📥 Export" }
                }
            }
            div {
                style: "display: flex; gap: 16px; align-items: flex-start; margin-top: 12px;",
                if show_filters {
                    div {
                        style: "width: 300px; flex-shrink: 0; background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
                        ChartTypePicker {}
                        ComparisonSelector {}
                        MetricSelector {}
                        AxisFilters {}
                        BackendStatus {}
                    }
                }
                div {
                    style: "flex: 1; min-width: 0; background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
                    {body}
                }
            }
        }
    }
}

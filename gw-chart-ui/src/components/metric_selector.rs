//! Metric picker: radio buttons, or checkboxes for multi-metric comparisons.

use crate::state::VisualizationContext;
use dioxus::prelude::*;
use gw_model::metric::Metric;

#[component]
pub fn MetricSelector() -> Element {
    let mut viz = use_context::<VisualizationContext>();
    let selection = viz.selection.read().clone();
    let input_type = if selection.comparison_type().is_multi_metric() {
        "checkbox"
    } else {
        "radio"
    };

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            label {
                style: "display: block; font-weight: 600; margin-bottom: 8px;",
                "Metrics"
            }
            for metric in Metric::ALL {
                label {
                    key: "{metric}",
                    style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; cursor: pointer;",
                    input {
                        r#type: "{input_type}",
                        name: "metrics",
                        value: "{metric}",
                        checked: selection.has_metric(metric),
                        disabled: selection.is_metric_locked(metric),
                        onchange: move |evt: Event<FormData>| {
                            viz.selection.write().choose_metric(metric, evt.checked());
                        },
                    }
                    span { "{metric.label()}" }
                    span {
                        style: "color: #6B7280; font-size: 12px;",
                        "({metric.unit()})"
                    }
                }
            }
        }
    }
}

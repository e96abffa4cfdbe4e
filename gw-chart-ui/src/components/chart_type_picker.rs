//! Chart type buttons. Types that cannot show the current comparison are disabled.

use crate::state::VisualizationContext;
use dioxus::prelude::*;
use gw_model::chart::ChartType;

#[component]
pub fn ChartTypePicker() -> Element {
    let mut viz = use_context::<VisualizationContext>();
    let current = viz.selection.read().chart_type();
    let comparison = viz.selection.read().comparison_type();

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            label {
                style: "display: block; font-weight: 600; margin-bottom: 8px;",
                "Chart Type"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for chart in ChartType::ALL {
                    {
                        let compatible = chart.is_compatible_with(comparison);
                        let style = if chart == current {
                            "padding: 10px; text-align: left; border: 1px solid #3B82F6; background: #EFF6FF; color: #1E3A8A; border-radius: 8px;"
                        } else if compatible {
                            "padding: 10px; text-align: left; border: 1px solid #E5E7EB; background: white; border-radius: 8px; cursor: pointer;"
                        } else {
                            "padding: 10px; text-align: left; border: 1px solid #F3F4F6; background: #F9FAFB; color: #9CA3AF; border-radius: 8px; cursor: not-allowed;"
                        };
                        rsx! {
                            button {
                                key: "{chart}",
                                style: "{style}",
                                disabled: !compatible,
                                onclick: move |_| viz.selection.write().set_chart_type(chart),
                                "{chart.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

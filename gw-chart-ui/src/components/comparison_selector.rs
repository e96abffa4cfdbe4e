//! Dropdown selector for the comparison axis.

use crate::state::VisualizationContext;
use dioxus::prelude::*;
use gw_model::chart::ComparisonType;
use log::warn;

#[component]
pub fn ComparisonSelector() -> Element {
    let mut viz = use_context::<VisualizationContext>();
    let current = viz.selection.read().comparison_type();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<ComparisonType>() {
        Ok(comparison) => viz.selection.write().set_comparison_type(comparison),
        Err(e) => warn!("{e}"),
    };

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            label {
                r#for: "comparison-select",
                style: "display: block; font-weight: 600; margin-bottom: 8px;",
                "Comparison Type"
            }
            select {
                id: "comparison-select",
                style: "width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 8px;",
                onchange: on_change,
                for comparison in ComparisonType::ALL {
                    option {
                        key: "{comparison}",
                        value: "{comparison}",
                        selected: comparison == current,
                        "{comparison.label()}"
                    }
                }
            }
        }
    }
}

//! Filter controls for the active comparison axis.
//!
//! Only the controls the request builder will read are shown: states for
//! state comparisons, districts for district comparisons, years plus entity
//! for yearly trends, entity for multi-metric, and the year everywhere except
//! yearly trends.

use crate::components::CheckboxList;
use crate::state::VisualizationContext;
use dioxus::prelude::*;
use gw_model::chart::ComparisonType;

#[component]
pub fn AxisFilters() -> Element {
    let mut viz = use_context::<VisualizationContext>();
    let catalog = viz.catalog();
    let selection = viz.selection.read().clone();
    let comparison = selection.comparison_type();
    let year_labels: Vec<String> = catalog.years.iter().map(i32::to_string).collect();
    let checked_years: Vec<String> = selection.years().iter().map(i32::to_string).collect();

    rsx! {
        if comparison == ComparisonType::State {
            CheckboxList {
                label: "States".to_string(),
                items: catalog.states.clone(),
                checked: selection.states().to_vec(),
                on_toggle: move |(state, on): (String, bool)| {
                    viz.selection.write().toggle_state(&state, on);
                },
            }
        }
        if comparison == ComparisonType::District {
            CheckboxList {
                label: "Districts (Kerala)".to_string(),
                items: catalog.districts.clone(),
                checked: selection.districts().to_vec(),
                on_toggle: move |(district, on): (String, bool)| {
                    viz.selection.write().toggle_district(&district, on);
                },
            }
        }
        if comparison == ComparisonType::Yearly {
            CheckboxList {
                label: "Years".to_string(),
                items: year_labels,
                checked: checked_years,
                on_toggle: move |(year, on): (String, bool)| {
                    if let Ok(year) = year.parse::<i32>() {
                        viz.selection.write().toggle_year(year, on);
                    }
                },
            }
        }
        if comparison.uses_entity_filter() {
            div {
                style: "margin-bottom: 20px;",
                label {
                    r#for: "entity-select",
                    style: "display: block; font-weight: 600; margin-bottom: 8px;",
                    "Entity"
                }
                select {
                    id: "entity-select",
                    style: "width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 8px;",
                    onchange: move |evt: Event<FormData>| viz.selection.write().set_entity(evt.value()),
                    for state in catalog.states.iter() {
                        option {
                            key: "{state}",
                            value: "{state}",
                            selected: state == selection.entity(),
                            "{state}"
                        }
                    }
                }
            }
        }
        if comparison.uses_year_filter() {
            div {
                style: "margin-bottom: 20px;",
                label {
                    r#for: "year-select",
                    style: "display: block; font-weight: 600; margin-bottom: 8px;",
                    "Year"
                }
                select {
                    id: "year-select",
                    style: "width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 8px;",
                    onchange: move |evt: Event<FormData>| {
                        if let Ok(year) = evt.value().parse::<i32>() {
                            viz.selection.write().set_year(year);
                        }
                    },
                    for year in catalog.years.iter().copied() {
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: year == selection.year(),
                            "{year}"
                        }
                    }
                }
            }
        }
    }
}

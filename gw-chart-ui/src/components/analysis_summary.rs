//! Summary panel under a rendered chart.

use dioxus::prelude::*;
use gw_model::chart::{ChartType, ComparisonType};
use gw_model::response::ChartPayload;

#[derive(Props, Clone, PartialEq)]
pub struct AnalysisSummaryProps {
    pub payload: ChartPayload,
    pub chart_type: ChartType,
    pub comparison_type: ComparisonType,
    pub metric_count: usize,
}

#[component]
fn SummaryTile(label: String, value: String, tint: String) -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 12px; border-radius: 8px; background: {tint};",
            div {
                style: "font-size: 11px; font-weight: 600; text-transform: uppercase; color: #374151; margin-bottom: 4px;",
                "{label}"
            }
            div {
                style: "font-weight: 600; text-transform: capitalize;",
                "{value}"
            }
        }
    }
}

#[component]
pub fn AnalysisSummary(props: AnalysisSummaryProps) -> Element {
    let metadata = &props.payload.metadata;
    rsx! {
        div {
            style: "margin-top: 16px; padding: 16px; background: white; border: 1px solid #E5E7EB; border-radius: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h3 { style: "margin: 0; font-size: 16px;", "Analysis Summary" }
                span {
                    style: "font-size: 13px; color: #4B5563;",
                    "Processed in {props.payload.processing_time}s"
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px;",
                SummaryTile { label: "Chart Type".to_string(), value: props.chart_type.to_string(), tint: "#EFF6FF".to_string() }
                SummaryTile { label: "Comparison".to_string(), value: props.comparison_type.to_string(), tint: "#F0FDF4".to_string() }
                SummaryTile { label: "Metrics".to_string(), value: props.metric_count.to_string(), tint: "#FAF5FF".to_string() }
                SummaryTile { label: "Data Points".to_string(), value: metadata.data_points.to_string(), tint: "#FFF7ED".to_string() }
            }
            if let Some(query) = metadata.query_used.as_ref() {
                details {
                    style: "margin-top: 12px; padding: 12px; background: #F9FAFB; border-radius: 8px; cursor: pointer;",
                    summary { style: "font-size: 13px; font-weight: 500;", "Database Query Used" }
                    pre {
                        style: "margin-top: 8px; font-size: 12px; background: white; padding: 8px; border: 1px solid #E5E7EB; overflow-x: auto;",
                        "{query}"
                    }
                }
            }
        }
    }
}

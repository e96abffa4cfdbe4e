//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js is pulled from a CDN at startup and the bridge functions in
//! `assets/js/chart-bridge.js` are evaluated as globals once it is ready.
//! This module serializes chart data and calls those globals.

use anyhow::{anyhow, Context};
use gw_model::chart::ChartType;
use gw_model::response::ChartPayload;
use wasm_bindgen::JsCast;

static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Groundwater JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Load Chart.js (once) and install the bridge functions on `window`.
///
/// Safe to call on every render; only the first call does anything.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__gwChartScripts && !window.__gwChartsReady) window.__gwChartScripts = {};",
        js_string(CHART_BRIDGE_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__gwChartsReady || window.__gwChartsLoading) return;
            window.__gwChartsLoading = true;
            if (typeof Chart === 'undefined') {{
                var script = document.createElement('script');
                script.src = {cdn};
                document.head.appendChild(script);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__gwChartScripts);
                    delete window.__gwChartScripts;
                    window.renderGroundwaterChart = renderGroundwaterChart;
                    window.destroyGroundwaterChart = destroyGroundwaterChart;
                    window.__gwChartsReady = true;
                    console.log('Groundwater charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        cdn = js_string(CHART_JS_CDN),
    );
    let _ = js_sys::eval(&init_js);
}

/// Draw `payload` into the container as a `chart_type` chart.
///
/// Polls until Chart.js is loaded and the container exists in the DOM.
pub fn render_chart(container_id: &str, chart_type: ChartType, payload: &ChartPayload) {
    let data_json = payload.chart_data().to_string();
    let options_json = payload.render_options().to_string();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gwChartsReady &&
                    typeof window.renderGroundwaterChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderGroundwaterChart({id}, {kind}, {data}, {options});
                    }} catch(e) {{ console.error('[Groundwater] renderGroundwaterChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        kind = js_string(chart_type.as_str()),
        data = js_string(&data_json),
        options = js_string(&options_json),
    ));
}

/// Destroy the chart in the given container, if any.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyGroundwaterChart) {{ window.destroyGroundwaterChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}",
        id = js_string(container_id)
    ));
}

/// `groundwater-chart-<millis>.png`
pub fn export_file_name() -> String {
    format!("groundwater-chart-{}.png", js_sys::Date::now() as u64)
}

/// Download the canvas inside `container_id` as a PNG.
pub fn export_png(container_id: &str, file_name: &str) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas = document
        .query_selector(&format!("#{container_id} canvas"))
        .map_err(|e| anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow!("no chart canvas in #{container_id}"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| anyhow!("chart element is not a canvas"))?;
    let url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| anyhow!("{e:?}"))
        .context("canvas export failed")?;
    let link = document
        .create_element("a")
        .map_err(|e| anyhow!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| anyhow!("could not create download link"))?;
    link.set_download(file_name);
    link.set_href(&url);
    link.click();
    Ok(())
}

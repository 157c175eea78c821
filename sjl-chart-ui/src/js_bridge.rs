//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static COMBO_CHART_JS: &str = include_str!("../assets/js/combo-chart.js");
static GEO_SCATTER_JS: &str = include_str!("../assets/js/geo-scatter.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Global functions promoted to `window.*` once the scripts are evaluated.
const CHART_FUNCTIONS: [&str; 7] = [
    "renderComboChart",
    "renderGeoScatter",
    "renderBarChart",
    "renderPieChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Polls (100 ms apart) before a pending render gives up, so a container
/// that never mounts can't be drawn into later with stale data.
const RENDER_POLL_LIMIT: u32 = 100;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SJL JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderComboChart(...)` via
/// `function` declarations. They are evaluated at global scope via an
/// indirect `eval()` once D3 is ready, and each function is then promoted
/// to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        COMBO_CHART_JS,
        GEO_SCATTER_JS,
        BAR_CHART_JS,
        PIE_CHART_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!("window.__sjlChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__sjlChartsReady) {{ return; }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__sjlChartScripts);
                    delete window.__sjlChartScripts;
                    {promote}
                    window.__sjlChartsReady = true;
                    console.log('SJL charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
    log::info!("Chart scripts queued for initialization");
}

/// Script that polls until D3, the chart scripts and the container exist,
/// then calls `window.{function}(containerId, dataJson, configJson)`.
fn ready_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__sjlChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[SJL] {function} error:', e); }}
                }} else if (attempts >= {limit}) {{
                    clearInterval(poll);
                    console.warn('[SJL] {function}: container ' + {id} + ' never became ready');
                }}
            }}, 100);
        }})();
        "#,
        limit = RENDER_POLL_LIMIT,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&ready_script(function, container_id, data_json, config_json));
}

/// Render rainfall bars with a spring discharge line overlay.
pub fn render_combo_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderComboChart", container_id, data_json, config_json);
}

/// Render springshed points on a lat/lon projection, sized by count.
pub fn render_geo_scatter(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGeoScatter", container_id, data_json, config_json);
}

/// Render a horizontal bar chart of sensor readings.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the device statistics pie chart.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

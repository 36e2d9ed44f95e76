//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/bar-chart.js` and is evaluated as
//! a global once D3 has loaded. This module serializes [`BarChart`] models
//! and calls those globals.

use aqi_core::chart::BarChart;

/// CDN build of D3 loaded by the dashboard page.
pub const D3_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7/dist/d3.min.js";

static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AQI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is stored on `window` and evaluated at global scope from the
/// polling callback, so its function declarations do not end up
/// block-scoped inside `setInterval`. Safe to call more than once.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__aqiChartsReady) {{ window.__aqiChartScripts = {}; }}",
        js_string(BAR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__aqiChartsReady || window.__aqiChartsPolling) return;
            window.__aqiChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__aqiChartScripts);
                    delete window.__aqiChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof clearChart !== 'undefined') window.clearChart = clearChart;
                    window.__aqiChartsReady = true;
                    window.__aqiChartsPolling = false;
                    console.log('AQI charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a bar chart into `container_id`, or clear it when the chart has
/// no bars.
///
/// Polls until D3, the chart script and the container element all exist.
pub fn render_bar_chart(container_id: &str, chart: &BarChart) {
    if chart.is_empty() {
        destroy_chart(container_id);
        return;
    }

    log::debug!("Rendering {} bars into #{}", chart.bars.len(), container_id);
    call_js(&render_script(container_id, &chart.to_json()));
}

/// Clear the chart in the given container. Any render still waiting on
/// D3 for that container is dropped.
pub fn destroy_chart(container_id: &str) {
    call_js(&clear_script(container_id));
}

/// Claim the next render sequence number for a container into `seq`.
/// A pending render only draws while its number is still the latest.
fn claim_seq(id: &str) -> String {
    format!(
        "window.__aqiChartSeq = window.__aqiChartSeq || {{}}; \
         var seq = (window.__aqiChartSeq[{id}] || 0) + 1; \
         window.__aqiChartSeq[{id}] = seq;"
    )
}

fn render_script(container_id: &str, chart_json: &str) -> String {
    let id = js_string(container_id);
    let chart_json = js_string(chart_json);
    let claim = claim_seq(&id);
    format!(
        r#"
        (function() {{
            {claim}
            var poll = setInterval(function() {{
                if (window.__aqiChartSeq[{id}] !== seq) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__aqiChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart({id}, {chart_json});
                    }} catch(e) {{ console.error('[AQI] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn clear_script(container_id: &str) -> String {
    let id = js_string(container_id);
    let claim = claim_seq(&id);
    format!(
        r#"
        (function() {{
            {claim}
            if (typeof window.clearChart !== 'undefined') {{
                window.clearChart({id});
            }} else {{
                var el = document.getElementById({id});
                if (el) el.innerHTML = '';
            }}
        }})();
        "#,
    )
}

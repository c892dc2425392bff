//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) once D3 is loaded and
//! exposed via `window.*`. This module serializes chart data and calls them.

use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Globals promoted to `window` after the chart scripts are evaluated.
const CHART_FUNCTIONS: [&str; 8] = [
    "renderPieChart",
    "renderLineChart",
    "renderLines",
    "renderMultiLineChart",
    "renderBarChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at app startup.
///
/// The scripts are stored on `window` and evaluated with an indirect eval so
/// their `function` declarations land at global scope rather than inside the
/// `setInterval` callback.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        PIE_CHART_JS,
        LINE_CHART_JS,
        MULTI_LINE_CHART_JS,
        BAR_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "window.__dashChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};"))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__dashChartsReady) return;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined' && window.__dashChartScripts) {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__dashChartScripts);
                    delete window.__dashChartScripts;
                    {promote}
                    window.__dashChartsReady = true;
                    console.log('dashboard charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
    log::info!("js_bridge: chart scripts queued for initialization");
}

/// Polls per chart before giving up on D3 or the container (100 ms apart).
const MAX_POLL_ATTEMPTS: u32 = 100;

/// Build the script that waits for the chart globals and the container
/// element, then calls `window.<function>(id, data, config)`.
///
/// The JSON payloads are passed as JS string literals, so quotes and
/// newlines inside them need no manual escaping. The poll handle is kept in
/// `window.__dashPolls[id]`; a newer render for the same id replaces it and
/// `destroy_script` stops it.
pub fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    let data = serde_json::to_string(data_json).unwrap_or_default();
    let config = serde_json::to_string(config_json).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var polls = window.__dashPolls = window.__dashPolls || {{}};
            if (polls[{id}]) clearInterval(polls[{id}]);
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                if (window.__dashChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    if (polls[{id}] === poll) delete polls[{id}];
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[dashboard] {function} error:', e); }}
                }} else if (attempts >= {MAX_POLL_ATTEMPTS}) {{
                    clearInterval(poll);
                    if (polls[{id}] === poll) delete polls[{id}];
                    console.warn('[dashboard] {function} gave up waiting for', {id});
                }}
            }}, 100);
            polls[{id}] = poll;
        }})();
        "#
    )
}

/// Build the script that stops a pending render poll for `container_id`,
/// empties the container and hides the tooltip.
pub fn destroy_script(container_id: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        "if (window.__dashPolls && window.__dashPolls[{id}]) {{ \
         clearInterval(window.__dashPolls[{id}]); delete window.__dashPolls[{id}]; }} \
         var el = document.getElementById({id}); if (el) el.innerHTML = ''; \
         if (window.hideTooltip) window.hideTooltip();"
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("js_bridge: {} into #{}", function, container_id);
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render a pie chart from precomputed slices.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render a single-series line chart.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render several lines over shared x labels.
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMultiLineChart", container_id, data_json, config_json);
}

pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container, including a render
/// still waiting for D3.
pub fn destroy_chart(container_id: &str) {
    log::debug!("js_bridge: destroy #{}", container_id);
    call_js(&destroy_script(container_id));
}

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Resolve on the next `requestAnimationFrame` tick.
///
/// Resolves immediately when there is no window, so callers never hang.
pub async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_script_quotes_payloads() {
        let script = render_script(
            "renderPieChart",
            "category-chart",
            r#"[{"name":"Home & Garden's"}]"#,
            "{}",
        );
        assert!(script.contains("window.renderPieChart(\"category-chart\""));
        assert!(script.contains(r#""[{\"name\":\"Home & Garden's\"}]""#));
        assert!(script.contains("document.getElementById(\"category-chart\")"));
    }

    #[test]
    fn render_script_has_no_raw_newlines_from_data() {
        let script = render_script("renderBarChart", "bars", "[\n1,\n2]", "{}");
        assert!(script.contains(r#""[\n1,\n2]""#));
    }

    #[test]
    fn render_registers_its_poll_and_gives_up() {
        let script = render_script("renderLineChart", "sales-overview-chart", "[]", "{}");
        assert!(script.contains("polls[\"sales-overview-chart\"] = poll;"));
        assert!(script.contains("if (polls[\"sales-overview-chart\"]) clearInterval(polls[\"sales-overview-chart\"]);"));
        assert!(script.contains(&format!("attempts >= {MAX_POLL_ATTEMPTS}")));
    }

    #[test]
    fn destroy_stops_the_poll_for_the_same_id() {
        let script = destroy_script("sales-overview-chart");
        let clear = script
            .find("clearInterval(window.__dashPolls[\"sales-overview-chart\"])")
            .expect("poll is cleared");
        let empty = script.find("el.innerHTML = ''").expect("container is emptied");
        assert!(clear < empty);
        assert!(script.contains("delete window.__dashPolls[\"sales-overview-chart\"]"));
        assert!(!script.contains("other-chart"));
    }

    #[test]
    fn every_promoted_function_is_defined() {
        let all_js = [TOOLTIP_JS, PIE_CHART_JS, LINE_CHART_JS, MULTI_LINE_CHART_JS, BAR_CHART_JS].join("\n");
        for name in CHART_FUNCTIONS {
            assert!(
                all_js.contains(&format!("function {name}(")),
                "{name} missing from chart scripts"
            );
        }
    }
}

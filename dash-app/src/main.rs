//! Admin dashboard
//!
//! A dark-themed single-page app with a collapsible sidebar and one page per
//! route. All data comes from the CSV fixtures compiled into `dash-data`;
//! charts are drawn by D3.js through `dash_ui::js_bridge`.
//!
//! Startup:
//! 1. Parse the embedded `dashboard.json` (falls back to defaults on error).
//! 2. Start the logger at the configured level.
//! 3. Mount `App` on the configured root element.
//! 4. `App` provides `AppState`, loads D3 and queues the chart scripts.

mod pages;
mod routes;
mod shell;

use dash_core::config::DashboardConfig;
use dash_ui::js_bridge;
use dash_ui::state::AppState;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use routes::AppRoute;

const D3_SRC: &str = "https://d3js.org/d3.v7.min.js";

fn log_level(name: &str) -> Level {
    name.parse().unwrap_or(Level::INFO)
}

fn main() {
    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };

    dioxus_logger::init(log_level(&config.log_level)).expect("failed to init logger");
    if let Some(e) = config_error {
        log::warn!("dashboard.json unusable, using defaults: {}", e);
    }
    log::info!("mounting dashboard on #{}", config.root_element);

    let root = config.root_element.clone();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(root))
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<DashboardConfig>();
    use_context_provider(move || AppState::new(config));

    use_effect(move || {
        js_bridge::init_charts();
    });

    rsx! {
        document::Script { src: D3_SRC }
        Router::<AppRoute> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_parse_with_fallback() {
        assert_eq!(log_level("debug"), Level::DEBUG);
        assert_eq!(log_level("WARN"), Level::WARN);
        assert_eq!(log_level("chatty"), Level::INFO);
    }
}

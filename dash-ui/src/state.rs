//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared across the shell into a
//! single struct provided via `use_context_provider`. Child components retrieve
//! it with `use_context::<AppState>()`. `sidebar` is only written by the toggle
//! handler; the width and opacity signals are written by the sidebar's frame
//! loop. Readers re-render after each write.

use dash_core::config::DashboardConfig;
use dash_core::sidebar::SidebarState;
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Layout and timing configuration
    pub config: Signal<DashboardConfig>,
    /// Sidebar state machine
    pub sidebar: Signal<SidebarState>,
    /// Width currently on screen, animated toward the state's width
    pub sidebar_width: Signal<f64>,
    /// Opacity of the item labels while they fade in
    pub label_opacity: Signal<f64>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let sidebar = SidebarState::default();
        let width = sidebar.width(&config.sidebar);
        Self {
            config: Signal::new(config),
            sidebar: Signal::new(sidebar),
            sidebar_width: Signal::new(width),
            label_opacity: Signal::new(1.0),
        }
    }
}

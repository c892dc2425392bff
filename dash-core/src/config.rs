//! Dashboard configuration.
//!
//! The defaults live in `fixtures/dashboard.json`, embedded at compile time.
//! Every field has a serde default, so a partial document is valid.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Embedded default configuration.
pub static DASHBOARD_JSON: &str = include_str!("../../fixtures/dashboard.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// DOM id the web app mounts into
    pub root_element: String,
    /// Log level name ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
    pub sidebar: SidebarConfig,
}

/// Sidebar geometry and animation timings, in CSS pixels and milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub expanded_width: f64,
    pub collapsed_width: f64,
    pub transition_ms: f64,
    pub label_fade_ms: f64,
    pub label_delay_ms: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            root_element: "main".to_string(),
            log_level: "info".to_string(),
            sidebar: SidebarConfig::default(),
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            expanded_width: 256.0,
            collapsed_width: 80.0,
            transition_ms: 300.0,
            label_fade_ms: 200.0,
            label_delay_ms: 300.0,
        }
    }
}

impl DashboardConfig {
    /// Parse the embedded configuration.
    pub fn load() -> Result<Self> {
        Self::from_json(DASHBOARD_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        log::debug!("loaded dashboard config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = DashboardConfig::load().unwrap();
        assert_eq!(config.sidebar.expanded_width, 256.0);
        assert_eq!(config.sidebar.collapsed_width, 80.0);
        assert_eq!(config.root_element, "dashboard-root");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = DashboardConfig::from_json(r#"{"sidebar": {"collapsed_width": 64}}"#).unwrap();
        assert_eq!(config.sidebar.collapsed_width, 64.0);
        assert_eq!(config.sidebar.expanded_width, 256.0);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{ sidebar: ").is_err());
    }
}

//! Headline metric cards shown at the top of most pages.

use crate::components::{report, Card, ErrorDisplay, IconSvg};
use dash_core::nav::Page;
use dash_data::format;
use dash_data::loader;
use dash_data::models::StatMetric;
use dioxus::prelude::*;

/// Text color for the period-over-period change.
pub(crate) fn change_color(change_pct: f64) -> &'static str {
    if change_pct >= 0.0 {
        "#10B981"
    } else {
        "#EF4444"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub metric: StatMetric,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let metric = &props.metric;
    let value = format::stat_value(metric);
    let change = format::change(metric.change_pct);
    let change_color = change_color(metric.change_pct);

    rsx! {
        Card {
            style: "padding: 20px;".to_string(),
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; font-weight: 500; color: #9CA3AF;",
                IconSvg { icon: metric.icon, size: 20, color: metric.color.clone() }
                "{metric.name}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 30px; font-weight: 600; color: #F3F4F6;",
                "{value}"
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: {change_color};",
                "{change} vs last period"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatGridProps {
    pub page: Page,
}

/// All stat cards for `page`, in fixture order.
#[component]
pub fn StatGrid(props: StatGridProps) -> Element {
    let page = props.page;
    let stats = use_hook(move || report("stats", loader::load_stats(page)));

    rsx! {
        match stats {
            Ok(stats) => rsx! {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; margin-bottom: 32px;",
                    for metric in stats.into_iter() {
                        StatCard { key: "{metric.name}", metric }
                    }
                }
            },
            Err(message) => rsx! { ErrorDisplay { message } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_colors() {
        assert_eq!(change_color(12.5), "#10B981");
        assert_eq!(change_color(0.0), "#10B981");
        assert_eq!(change_color(-2.1), "#EF4444");
    }
}

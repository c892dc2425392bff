//! AI-style insight list on the analytics page.

use crate::components::{report, Card, ChartHeader, ErrorDisplay, IconSvg};
use dash_data::loader;
use dioxus::prelude::*;

#[component]
pub fn InsightsList() -> Element {
    let insights = use_hook(|| report("insights", loader::load_insights()));

    rsx! {
        Card {
            ChartHeader { title: "AI-Powered Insights".to_string() }
            match insights {
                Ok(insights) => rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        for (i, insight) in insights.into_iter().enumerate() {
                            div {
                                key: "{i}",
                                style: "display: flex; align-items: flex-start; gap: 12px;",
                                div {
                                    style: "padding: 8px; border-radius: 9999px; background: {insight.color}33; display: flex;",
                                    IconSvg { icon: insight.icon, size: 18, color: insight.color.clone() }
                                }
                                p {
                                    style: "margin: 0; color: #D1D5DB;",
                                    "{insight.text}"
                                }
                            }
                        }
                    }
                },
                Err(message) => rsx! { ErrorDisplay { message } },
            }
        }
    }
}

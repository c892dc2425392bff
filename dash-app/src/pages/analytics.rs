use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_data::Dataset;
use dash_ui::components::{BarChartCard, InsightsList, PageHeader, RevenueTargetChart};
use dioxus::prelude::*;

#[component]
pub fn AnalyticsPage() -> Element {
    rsx! {
        PageHeader { title: "Analytics Dashboard".to_string() }
        main {
            style: MAIN_STYLE,
            div {
                style: CHART_GRID_STYLE,
                RevenueTargetChart {}
                BarChartCard {
                    title: "Channel Performance".to_string(),
                    dataset: Dataset::ChannelPerformance,
                }
            }
            InsightsList {}
        }
    }
}

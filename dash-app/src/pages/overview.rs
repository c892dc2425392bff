use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_core::nav::Page;
use dash_data::Dataset;
use dash_ui::components::{BarChartCard, CategoryDistributionChart, LineChartCard, PageHeader, StatGrid};
use dioxus::prelude::*;

#[component]
pub fn OverviewPage() -> Element {
    rsx! {
        PageHeader { title: "Overview".to_string() }
        main {
            style: MAIN_STYLE,
            StatGrid { page: Page::Overview }
            div {
                style: CHART_GRID_STYLE,
                LineChartCard {
                    title: "Sales Overview".to_string(),
                    dataset: Dataset::SalesOverview,
                    series_name: "Sales".to_string(),
                    value_prefix: "$".to_string(),
                }
                CategoryDistributionChart {}
                BarChartCard {
                    title: "Sales by Channel".to_string(),
                    dataset: Dataset::SalesByChannel,
                    value_prefix: "$".to_string(),
                }
            }
        }
    }
}


use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_core::nav::Page;
use dash_data::Dataset;
use dash_ui::components::{CategoryDistributionChart, LineChartCard, PageHeader, ProductsTable, StatGrid};
use dioxus::prelude::*;

#[component]
pub fn ProductsPage() -> Element {
    rsx! {
        PageHeader { title: "Products".to_string() }
        main {
            style: MAIN_STYLE,
            StatGrid { page: Page::Products }
            ProductsTable {}
            div {
                style: CHART_GRID_STYLE,
                LineChartCard {
                    title: "Sales Trend".to_string(),
                    dataset: Dataset::SalesTrend,
                    series_name: "Sales".to_string(),
                    color: "#8B5CF6".to_string(),
                    value_prefix: "$".to_string(),
                }
                CategoryDistributionChart {}
            }
        }
    }
}

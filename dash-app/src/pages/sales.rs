use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_core::nav::Page;
use dash_data::models::Unit;
use dash_data::Dataset;
use dash_ui::components::{BarChartCard, LineChartCard, PageHeader, PieChartCard, StatGrid};
use dioxus::prelude::*;

#[component]
pub fn SalesPage() -> Element {
    rsx! {
        PageHeader { title: "Sales Dashboard".to_string() }
        main {
            style: MAIN_STYLE,
            StatGrid { page: Page::Sales }
            div {
                style: CHART_GRID_STYLE,
                LineChartCard {
                    title: "Revenue by Month".to_string(),
                    dataset: Dataset::RevenueByMonth,
                    series_name: "Revenue".to_string(),
                    color: "#10B981".to_string(),
                    value_prefix: "$".to_string(),
                }
                PieChartCard {
                    title: "Sales by Category".to_string(),
                    dataset: Dataset::SalesByCategory,
                    unit: Unit::Currency,
                }
                BarChartCard {
                    title: "Daily Sales Trend".to_string(),
                    dataset: Dataset::DailySales,
                    value_prefix: "$".to_string(),
                }
            }
        }
    }
}

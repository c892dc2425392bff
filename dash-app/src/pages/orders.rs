use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_core::nav::Page;
use dash_data::Dataset;
use dash_ui::components::{LineChartCard, OrdersTable, PageHeader, PieChartCard, StatGrid};
use dioxus::prelude::*;

#[component]
pub fn OrdersPage() -> Element {
    rsx! {
        PageHeader { title: "Orders".to_string() }
        main {
            style: MAIN_STYLE,
            StatGrid { page: Page::Orders }
            div {
                style: CHART_GRID_STYLE,
                LineChartCard {
                    title: "Daily Orders".to_string(),
                    dataset: Dataset::DailyOrders,
                    series_name: "Orders".to_string(),
                    color: "#F59E0B".to_string(),
                }
                PieChartCard {
                    title: "Order Status Distribution".to_string(),
                    dataset: Dataset::OrderStatuses,
                }
            }
            OrdersTable {}
        }
    }
}

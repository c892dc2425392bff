use super::{CHART_GRID_STYLE, MAIN_STYLE};
use dash_core::nav::Page;
use dash_data::Dataset;
use dash_ui::components::{LineChartCard, PageHeader, PieChartCard, StatGrid, UsersTable};
use dioxus::prelude::*;

#[component]
pub fn UsersPage() -> Element {
    rsx! {
        PageHeader { title: "Users".to_string() }
        main {
            style: MAIN_STYLE,
            StatGrid { page: Page::Users }
            UsersTable {}
            div {
                style: CHART_GRID_STYLE,
                LineChartCard {
                    title: "User Growth".to_string(),
                    dataset: Dataset::UserGrowth,
                    series_name: "Users".to_string(),
                    color: "#EC4899".to_string(),
                }
                PieChartCard {
                    title: "User Demographics".to_string(),
                    dataset: Dataset::UserDemographics,
                }
            }
        }
    }
}

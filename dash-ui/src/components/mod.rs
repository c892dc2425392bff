//! Reusable Dioxus RSX components for the dashboard.

mod card;
mod chart_container;
mod chart_header;
mod charts;
mod date_range_picker;
mod error_display;
mod icon;
mod insights;
mod orders_table;
mod page_header;
mod products_table;
mod sidebar;
mod stat_card;
mod users_table;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use charts::{BarChartCard, CategoryDistributionChart, LineChartCard, PieChartCard, RevenueTargetChart};
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use icon::IconSvg;
pub use insights::InsightsList;
pub use orders_table::OrdersTable;
pub use page_header::PageHeader;
pub use products_table::ProductsTable;
pub use sidebar::Sidebar;
pub use stat_card::{StatCard, StatGrid};
pub use users_table::UsersTable;

/// Log a failed fixture load and keep its message for `ErrorDisplay`.
pub(crate) fn report<T>(what: &str, result: dash_core::Result<T>) -> Result<T, String> {
    result.map_err(|e| {
        log::error!("failed to load {}: {}", what, e);
        format!("Could not load {}: {}", what, e)
    })
}

//! Embedded fixture datasets.

use dash_core::{DashError, Result};
use std::fmt;
use std::str::FromStr;

/// Row shape of a dataset, used to pick the right parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// `name,value` rows for pie and bar charts
    Categories,
    /// `label,value` rows for line charts
    Series,
    /// `label,revenue,target` rows for the two-line chart
    Targets,
    Products,
    Users,
    Orders,
    Stats,
    Insights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    CategoryDistribution,
    SalesOverview,
    SalesByChannel,
    SalesTrend,
    UserGrowth,
    UserDemographics,
    RevenueByMonth,
    SalesByCategory,
    DailySales,
    DailyOrders,
    OrderStatuses,
    ChannelPerformance,
    RevenueTarget,
    Products,
    Users,
    Orders,
    Stats,
    Insights,
}

impl Dataset {
    pub const ALL: [Dataset; 18] = [
        Dataset::CategoryDistribution,
        Dataset::SalesOverview,
        Dataset::SalesByChannel,
        Dataset::SalesTrend,
        Dataset::UserGrowth,
        Dataset::UserDemographics,
        Dataset::RevenueByMonth,
        Dataset::SalesByCategory,
        Dataset::DailySales,
        Dataset::DailyOrders,
        Dataset::OrderStatuses,
        Dataset::ChannelPerformance,
        Dataset::RevenueTarget,
        Dataset::Products,
        Dataset::Users,
        Dataset::Orders,
        Dataset::Stats,
        Dataset::Insights,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Dataset::CategoryDistribution => "category-distribution",
            Dataset::SalesOverview => "sales-overview",
            Dataset::SalesByChannel => "sales-by-channel",
            Dataset::SalesTrend => "sales-trend",
            Dataset::UserGrowth => "user-growth",
            Dataset::UserDemographics => "user-demographics",
            Dataset::RevenueByMonth => "revenue-by-month",
            Dataset::SalesByCategory => "sales-by-category",
            Dataset::DailySales => "daily-sales",
            Dataset::DailyOrders => "daily-orders",
            Dataset::OrderStatuses => "order-status",
            Dataset::ChannelPerformance => "channel-performance",
            Dataset::RevenueTarget => "revenue-target",
            Dataset::Products => "products",
            Dataset::Users => "users",
            Dataset::Orders => "orders",
            Dataset::Stats => "stats",
            Dataset::Insights => "insights",
        }
    }

    pub const fn kind(self) -> DatasetKind {
        match self {
            Dataset::CategoryDistribution
            | Dataset::SalesByChannel
            | Dataset::UserDemographics
            | Dataset::SalesByCategory
            | Dataset::DailySales
            | Dataset::OrderStatuses
            | Dataset::ChannelPerformance => DatasetKind::Categories,
            Dataset::SalesOverview
            | Dataset::SalesTrend
            | Dataset::UserGrowth
            | Dataset::RevenueByMonth
            | Dataset::DailyOrders => DatasetKind::Series,
            Dataset::RevenueTarget => DatasetKind::Targets,
            Dataset::Products => DatasetKind::Products,
            Dataset::Users => DatasetKind::Users,
            Dataset::Orders => DatasetKind::Orders,
            Dataset::Stats => DatasetKind::Stats,
            Dataset::Insights => DatasetKind::Insights,
        }
    }

    /// Raw CSV text, headers included.
    pub const fn csv(self) -> &'static str {
        match self {
            Dataset::CategoryDistribution => include_str!("../../fixtures/category_distribution.csv"),
            Dataset::SalesOverview => include_str!("../../fixtures/sales_overview.csv"),
            Dataset::SalesByChannel => include_str!("../../fixtures/sales_by_channel.csv"),
            Dataset::SalesTrend => include_str!("../../fixtures/sales_trend.csv"),
            Dataset::UserGrowth => include_str!("../../fixtures/user_growth.csv"),
            Dataset::UserDemographics => include_str!("../../fixtures/user_demographics.csv"),
            Dataset::RevenueByMonth => include_str!("../../fixtures/revenue_by_month.csv"),
            Dataset::SalesByCategory => include_str!("../../fixtures/sales_by_category.csv"),
            Dataset::DailySales => include_str!("../../fixtures/daily_sales.csv"),
            Dataset::DailyOrders => include_str!("../../fixtures/daily_orders.csv"),
            Dataset::OrderStatuses => include_str!("../../fixtures/order_status.csv"),
            Dataset::ChannelPerformance => include_str!("../../fixtures/channel_performance.csv"),
            Dataset::RevenueTarget => include_str!("../../fixtures/revenue_target.csv"),
            Dataset::Products => include_str!("../../fixtures/products.csv"),
            Dataset::Users => include_str!("../../fixtures/users.csv"),
            Dataset::Orders => include_str!("../../fixtures/orders.csv"),
            Dataset::Stats => include_str!("../../fixtures/stats.csv"),
            Dataset::Insights => include_str!("../../fixtures/insights.csv"),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Dataset::ALL
            .iter()
            .copied()
            .find(|dataset| dataset.name() == s)
            .ok_or_else(|| DashError::UnknownDataset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.name().parse::<Dataset>().unwrap(), dataset);
        }
    }

    #[test]
    fn unknown_name() {
        assert!(matches!(
            "inventory".parse::<Dataset>(),
            Err(DashError::UnknownDataset(name)) if name == "inventory"
        ));
    }

    #[test]
    fn every_fixture_has_a_header_and_rows() {
        for dataset in Dataset::ALL {
            let lines = dataset.csv().lines().filter(|l| !l.trim().is_empty()).count();
            assert!(lines >= 2, "{} has no data rows", dataset);
        }
    }
}

//! CSV parsing for the embedded datasets.
//!
//! Every fixture has a header row; columns are matched by name through serde.
//! Chart values are checked after parsing: a negative or non-finite value in
//! a categories or series dataset is a [`DashError::InvalidValue`].

use crate::dataset::{Dataset, DatasetKind};
use crate::models::{
    CategoryDatum, Insight, Order, Product, SeriesPoint, StatMetric, TargetPoint, UserRecord,
};
use dash_core::nav::Page;
use dash_core::{DashError, Result};
use serde::de::DeserializeOwned;

/// Parse headed CSV text into rows of `T`.
pub fn parse_csv<T: DeserializeOwned>(name: &str, csv_data: &str) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let rows = rdr.deserialize::<T>().collect::<std::result::Result<Vec<T>, _>>()?;
    log::info!("loader: parsed {} rows from {}", rows.len(), name);
    Ok(rows)
}

fn check_values(name: &str, values: impl Iterator<Item = f64>) -> Result<()> {
    for (row, value) in values.enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(DashError::InvalidValue {
                dataset: name.to_string(),
                row: row + 1,
                value,
            });
        }
    }
    Ok(())
}

/// Parse `name,value` rows, rejecting negative values.
pub fn parse_categories(name: &str, csv_data: &str) -> Result<Vec<CategoryDatum>> {
    let data: Vec<CategoryDatum> = parse_csv(name, csv_data)?;
    check_values(name, data.iter().map(|d| d.value))?;
    Ok(data)
}

/// Parse `label,value` rows, rejecting negative values.
pub fn parse_series(name: &str, csv_data: &str) -> Result<Vec<SeriesPoint>> {
    let data: Vec<SeriesPoint> = parse_csv(name, csv_data)?;
    check_values(name, data.iter().map(|d| d.value))?;
    Ok(data)
}

pub fn load_categories(dataset: Dataset) -> Result<Vec<CategoryDatum>> {
    parse_categories(dataset.name(), dataset.csv())
}

pub fn load_series(dataset: Dataset) -> Result<Vec<SeriesPoint>> {
    parse_series(dataset.name(), dataset.csv())
}

pub fn load_targets() -> Result<Vec<TargetPoint>> {
    let dataset = Dataset::RevenueTarget;
    let data: Vec<TargetPoint> = parse_csv(dataset.name(), dataset.csv())?;
    check_values(
        dataset.name(),
        data.iter().flat_map(|d| [d.revenue, d.target]),
    )?;
    Ok(data)
}

pub fn load_products() -> Result<Vec<Product>> {
    parse_csv(Dataset::Products.name(), Dataset::Products.csv())
}

pub fn load_users() -> Result<Vec<UserRecord>> {
    parse_csv(Dataset::Users.name(), Dataset::Users.csv())
}

/// Orders, most recent first.
pub fn load_orders() -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = parse_csv(Dataset::Orders.name(), Dataset::Orders.csv())?;
    orders.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(orders)
}

/// Stat cards for one page, in fixture order.
pub fn load_stats(page: Page) -> Result<Vec<StatMetric>> {
    let stats: Vec<StatMetric> = parse_csv(Dataset::Stats.name(), Dataset::Stats.csv())?;
    Ok(stats.into_iter().filter(|s| s.page == page).collect())
}

pub fn load_insights() -> Result<Vec<Insight>> {
    parse_csv(Dataset::Insights.name(), Dataset::Insights.csv())
}

/// Parse any dataset into JSON, whatever its row shape.
pub fn load_json(dataset: Dataset) -> Result<serde_json::Value> {
    let value = match dataset.kind() {
        DatasetKind::Categories => serde_json::to_value(load_categories(dataset)?)?,
        DatasetKind::Series => serde_json::to_value(load_series(dataset)?)?,
        DatasetKind::Targets => serde_json::to_value(load_targets()?)?,
        DatasetKind::Products => serde_json::to_value(load_products()?)?,
        DatasetKind::Users => serde_json::to_value(load_users()?)?,
        DatasetKind::Orders => serde_json::to_value(load_orders()?)?,
        DatasetKind::Stats => {
            let stats: Vec<StatMetric> = parse_csv(dataset.name(), dataset.csv())?;
            serde_json::to_value(stats)?
        }
        DatasetKind::Insights => serde_json::to_value(load_insights()?)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderStatus, Unit};
    use dash_core::icon::Icon;

    #[test]
    fn every_fixture_parses() {
        for dataset in Dataset::ALL {
            let json = load_json(dataset).unwrap_or_else(|e| panic!("{}: {}", dataset, e));
            assert!(
                json.as_array().map(|rows| !rows.is_empty()).unwrap_or(false),
                "{} is empty",
                dataset
            );
        }
    }

    #[test]
    fn category_distribution_fixture() {
        let data = load_categories(Dataset::CategoryDistribution).unwrap();
        let names: Vec<&str> = data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            ["Electronics", "Clothing", "Home & Garden", "Books", "Sports & Outdoors"]
        );
        let total: f64 = data.iter().map(|d| d.value).sum();
        assert_eq!(total, 14500.0);
    }

    #[test]
    fn negative_value_is_rejected() {
        let err = parse_categories("broken", "name,value\nA,10\nB,-3\n").unwrap_err();
        match err {
            DashError::InvalidValue { dataset, row, value } => {
                assert_eq!(dataset, "broken");
                assert_eq!(row, 2);
                assert_eq!(value, -3.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_value_is_a_csv_error() {
        let err = parse_series("broken", "label,value\nJan,lots\n").unwrap_err();
        assert!(matches!(err, DashError::Csv(_)));
    }

    #[test]
    fn stats_are_filtered_by_page() {
        let stats = load_stats(Page::Overview).unwrap();
        assert_eq!(stats.len(), 4);
        assert!(stats.iter().all(|s| s.page == Page::Overview));
        assert_eq!(stats[0].name, "Total Sales");
        assert_eq!(stats[0].unit, Unit::Currency);
        assert_eq!(stats[0].icon, Icon::Zap);

        for page in [Page::Products, Page::Users, Page::Sales, Page::Orders] {
            assert_eq!(load_stats(page).unwrap().len(), 4, "{page}");
        }
        assert!(load_stats(Page::Settings).unwrap().is_empty());
    }

    #[test]
    fn orders_are_newest_first() {
        let orders = load_orders().unwrap();
        assert!(orders.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(orders[0].id, "ORD008");
        assert_eq!(orders[0].status, OrderStatus::Delivered);
    }

    #[test]
    fn targets_have_both_series() {
        let targets = load_targets().unwrap();
        assert_eq!(targets.len(), 7);
        assert_eq!(targets[0].label, "Jan");
        assert_eq!(targets[0].target, 3800.0);
    }
}

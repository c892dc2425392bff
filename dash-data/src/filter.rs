//! Table filters for the products, users and orders tables.

use crate::models::{Order, OrderStatus, Product, UserRecord};
use chrono::NaiveDate;
use dash_core::Result;
use std::str::FromStr;

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Products whose name or category contains `query`, ignoring case.
/// A blank query keeps every row.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || matches(&p.name, &needle) || matches(&p.category, &needle))
        .cloned()
        .collect()
}

/// Users whose name or email contains `query`, ignoring case.
pub fn search_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| needle.is_empty() || matches(&u.name, &needle) || matches(&u.email, &needle))
        .cloned()
        .collect()
}

/// Order status dropdown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Value used in the `<select>` element.
    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(OrderStatus::Pending) => "pending",
            StatusFilter::Only(OrderStatus::Processing) => "processing",
            StatusFilter::Only(OrderStatus::Shipped) => "shipped",
            StatusFilter::Only(OrderStatus::Delivered) => "delivered",
        }
    }

    pub fn accepts(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    /// Unrecognized values fall back to `All`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Ok(OrderStatus::ALL
            .iter()
            .copied()
            .map(StatusFilter::Only)
            .find(|filter| filter.value() == s)
            .unwrap_or(StatusFilter::All))
    }
}

/// Inclusive date window; either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// Build a window from two `YYYY-MM-DD` inputs; blank inputs leave that end open.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_optional_date(start)?,
            end: parse_optional_date(end)?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    Ok(Some(NaiveDate::parse_from_str(input, "%Y-%m-%d")?))
}

pub fn filter_orders(orders: &[Order], status: StatusFilter, window: DateWindow) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| status.accepts(o.status) && window.contains(o.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_orders, load_products, load_users};
    use dash_core::DashError;

    #[test]
    fn product_search_is_case_insensitive() {
        let products = load_products().unwrap();
        let hits = search_products(&products, "ELECTRONICS");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Wireless Earbuds", "Smart Watch"]);

        let hits = search_products(&products, "mat");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Yoga Mat");
    }

    #[test]
    fn blank_query_keeps_everything() {
        let products = load_products().unwrap();
        assert_eq!(search_products(&products, "   ").len(), products.len());
        let users = load_users().unwrap();
        assert_eq!(search_users(&users, "").len(), users.len());
    }

    #[test]
    fn user_search_matches_email() {
        let users = load_users().unwrap();
        let hits = search_users(&users, "alice@");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Alice Brown");
        assert!(search_users(&users, "nobody").is_empty());
    }

    #[test]
    fn status_filter_values() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Shipped".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(OrderStatus::Shipped)
        );
        assert_eq!("lost".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        for status in OrderStatus::ALL {
            let filter = StatusFilter::Only(status);
            assert_eq!(filter.value().parse::<StatusFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn all_status_keeps_every_order() {
        let orders = load_orders().unwrap();
        let kept = filter_orders(&orders, StatusFilter::All, DateWindow::default());
        assert_eq!(kept, orders);
    }

    #[test]
    fn orders_by_status_and_window() {
        let orders = load_orders().unwrap();
        let delivered = filter_orders(
            &orders,
            StatusFilter::Only(OrderStatus::Delivered),
            DateWindow::default(),
        );
        assert_eq!(delivered.len(), 3);

        let window = DateWindow::parse("2023-07-02", "2023-07-04").unwrap();
        let in_window = filter_orders(&orders, StatusFilter::All, window);
        let ids: Vec<&str> = in_window.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD004", "ORD003", "ORD002"]);
    }

    #[test]
    fn bad_date_is_an_error() {
        let err = DateWindow::parse("07/02/2023", "").unwrap_err();
        assert!(matches!(err, DashError::Date(_)));
        let open = DateWindow::parse("", " ").unwrap();
        assert_eq!(open, DateWindow::default());
    }
}

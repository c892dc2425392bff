//! Row types for the embedded datasets.
//!
//! Everything derives `Serialize` so rows can be handed to D3.js as JSON.

use chrono::NaiveDate;
use dash_core::icon::Icon;
use dash_core::nav::Page;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One slice of a proportional chart. `value` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDatum {
    pub name: String,
    pub value: f64,
}

/// A labelled point on a line chart (month, weekday, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Actual revenue against its target for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPoint {
    pub label: String,
    pub revenue: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub sales: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl UserRecord {
    /// Two-letter avatar initials.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Badge color in the orders table.
    pub const fn color(self) -> &'static str {
        match self {
            OrderStatus::Pending => "#F59E0B",
            OrderStatus::Processing => "#3B82F6",
            OrderStatus::Shipped => "#8B5CF6",
            OrderStatus::Delivered => "#10B981",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub total: f64,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// How a stat card's value is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Currency,
    Count,
    Percent,
}

/// One headline number on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatMetric {
    pub page: Page,
    pub name: String,
    pub value: f64,
    pub unit: Unit,
    pub icon: Icon,
    pub color: String,
    /// Change versus the previous period, in percent
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub icon: Icon,
    pub color: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        let user = UserRecord {
            id: 1,
            name: "charlie van wilson".to_string(),
            email: "c@example.com".to_string(),
            role: "Customer".to_string(),
            status: UserStatus::Active,
        };
        assert_eq!(user.initials(), "CV");
    }
}

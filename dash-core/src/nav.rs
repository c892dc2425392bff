//! Pages and the navigation registry.
//!
//! The route table is a fixed bijection between seven paths and seven pages.
//! Every page resolves at compile time to its label, icon, accent color and
//! path; [`NAV_ITEMS`] lists them in sidebar order.

use crate::error::{DashError, Result};
use crate::icon::Icon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page container reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Overview,
    Products,
    Users,
    Sales,
    Orders,
    Analytics,
    Settings,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::Products,
        Page::Users,
        Page::Sales,
        Page::Orders,
        Page::Analytics,
        Page::Settings,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Page::Overview => "/",
            Page::Products => "/products",
            Page::Users => "/users",
            Page::Sales => "/sales",
            Page::Orders => "/orders",
            Page::Analytics => "/analytics",
            Page::Settings => "/settings",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Products => "Products",
            Page::Users => "Users",
            Page::Sales => "Sales",
            Page::Orders => "Orders",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }

    pub const fn icon(self) -> Icon {
        match self {
            Page::Overview => Icon::BarChart2,
            Page::Products => Icon::ShoppingBag,
            Page::Users => Icon::Users,
            Page::Sales => Icon::DollarSign,
            Page::Orders => Icon::ShoppingCart,
            Page::Analytics => Icon::TrendingUp,
            Page::Settings => Icon::Settings,
        }
    }

    /// Hex accent color of the sidebar icon.
    pub const fn accent_color(self) -> &'static str {
        match self {
            Page::Overview => "#6366f1",
            Page::Products => "#8b5cf6",
            Page::Users => "#ec4899",
            Page::Sales => "#10b981",
            Page::Orders => "#f59e0b",
            Page::Analytics => "#3b82f6",
            Page::Settings => "#6ee7b7",
        }
    }

    /// Registry entry for this page.
    pub fn nav_item(self) -> &'static NavItem {
        // NAV_ITEMS is built from Page::ALL in the same order
        &NAV_ITEMS[self as usize]
    }

    /// Resolve a route path to its page.
    ///
    /// A single trailing slash is ignored (`/sales/` is `/sales`). Paths that
    /// are not in the route table, including ones with empty segments such as
    /// `//`, return [`DashError::UnknownRoute`].
    ///
    /// ```
    /// use dash_core::nav::Page;
    ///
    /// assert_eq!(Page::from_path("/sales").unwrap(), Page::Sales);
    /// assert!(Page::from_path("/reports").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Page> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => trimmed,
        };
        Page::ALL
            .iter()
            .copied()
            .find(|page| page.path() == normalized)
            .ok_or_else(|| DashError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Page::from_path(s)
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: Icon,
    pub accent_color: &'static str,
    pub path: &'static str,
}

impl NavItem {
    const fn for_page(page: Page) -> Self {
        Self {
            page,
            label: page.label(),
            icon: page.icon(),
            accent_color: page.accent_color(),
            path: page.path(),
        }
    }

    /// The page a click on this item navigates to.
    ///
    /// Navigation does not depend on the sidebar state.
    pub const fn target(&self) -> Page {
        self.page
    }
}

/// The navigation registry, in sidebar order.
pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem::for_page(Page::Overview),
    NavItem::for_page(Page::Products),
    NavItem::for_page(Page::Users),
    NavItem::for_page(Page::Sales),
    NavItem::for_page(Page::Orders),
    NavItem::for_page(Page::Analytics),
    NavItem::for_page(Page::Settings),
];

pub fn nav_items() -> &'static [NavItem] {
    &NAV_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_page_order() {
        let pages: Vec<Page> = nav_items().iter().map(|item| item.page).collect();
        assert_eq!(pages, Page::ALL.to_vec());
        for page in Page::ALL {
            assert_eq!(page.nav_item().page, page);
        }
    }

    #[test]
    fn registry_entries() {
        let expected = [
            ("Overview", "#6366f1", "/"),
            ("Products", "#8b5cf6", "/products"),
            ("Users", "#ec4899", "/users"),
            ("Sales", "#10b981", "/sales"),
            ("Orders", "#f59e0b", "/orders"),
            ("Analytics", "#3b82f6", "/analytics"),
            ("Settings", "#6ee7b7", "/settings"),
        ];
        for (item, (label, color, path)) in nav_items().iter().zip(expected) {
            assert_eq!(item.label, label);
            assert_eq!(item.accent_color, color);
            assert_eq!(item.path, path);
        }
    }

    #[test]
    fn every_path_resolves_to_its_page() {
        for item in nav_items() {
            assert_eq!(Page::from_path(item.path).unwrap(), item.target());
        }
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/orders/").unwrap(), Page::Orders);
        assert_eq!(Page::from_path("/").unwrap(), Page::Overview);
    }

    #[test]
    fn unknown_path_is_an_error() {
        let err = Page::from_path("/reports").unwrap_err();
        assert!(matches!(err, DashError::UnknownRoute(path) if path == "/reports"));
        assert!(Page::from_path("").is_err());
        assert!(Page::from_path("/sales/2024").is_err());
    }

    #[test]
    fn empty_segments_are_rejected() {
        for path in ["//", "/sales//", "///"] {
            let err = Page::from_path(path).unwrap_err();
            assert!(matches!(err, DashError::UnknownRoute(p) if p == path));
        }
    }

    #[test]
    fn sales_item_resolves_to_the_sales_route() {
        let item = Page::Sales.nav_item();
        assert_eq!(item.accent_color, "#10b981");
        assert_eq!(item.path, "/sales");
        assert_eq!(item.target(), Page::Sales);
        assert_eq!(Page::from_path(item.path).unwrap(), item.target());
    }
}

//! URL routes. Every route renders inside `Shell`, including unknown paths.

use crate::pages::{
    AnalyticsPage, NotFound, OrdersPage, OverviewPage, ProductsPage, SalesPage, SettingsPage, UsersPage,
};
use crate::shell::Shell;
use dash_core::nav::Page;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppRoute {
    #[layout(Shell)]
        #[route("/")]
        OverviewPage {},
        #[route("/products")]
        ProductsPage {},
        #[route("/users")]
        UsersPage {},
        #[route("/sales")]
        SalesPage {},
        #[route("/orders")]
        OrdersPage {},
        #[route("/analytics")]
        AnalyticsPage {},
        #[route("/settings")]
        SettingsPage {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl AppRoute {
    /// The sidebar page this route belongs to, if any.
    pub fn page(&self) -> Option<Page> {
        match self {
            AppRoute::OverviewPage {} => Some(Page::Overview),
            AppRoute::ProductsPage {} => Some(Page::Products),
            AppRoute::UsersPage {} => Some(Page::Users),
            AppRoute::SalesPage {} => Some(Page::Sales),
            AppRoute::OrdersPage {} => Some(Page::Orders),
            AppRoute::AnalyticsPage {} => Some(Page::Analytics),
            AppRoute::SettingsPage {} => Some(Page::Settings),
            AppRoute::NotFound { .. } => None,
        }
    }
}

impl From<Page> for AppRoute {
    fn from(page: Page) -> Self {
        match page {
            Page::Overview => AppRoute::OverviewPage {},
            Page::Products => AppRoute::ProductsPage {},
            Page::Users => AppRoute::UsersPage {},
            Page::Sales => AppRoute::SalesPage {},
            Page::Orders => AppRoute::OrdersPage {},
            Page::Analytics => AppRoute::AnalyticsPage {},
            Page::Settings => AppRoute::SettingsPage {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_page_paths() {
        for page in Page::ALL {
            let route = AppRoute::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(route.page(), Some(page));
        }
    }

    #[test]
    fn known_paths_parse() {
        let route: AppRoute = "/sales".parse().unwrap();
        assert_eq!(route, AppRoute::SalesPage {});
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route: AppRoute = "/reports/2023".parse().unwrap();
        assert!(matches!(route, AppRoute::NotFound { .. }));
        assert_eq!(route.page(), None);
    }
}

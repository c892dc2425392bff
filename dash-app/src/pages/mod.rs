//! One component per route. Pages only arrange cards; each card loads its own data.

mod analytics;
mod not_found;
mod orders;
mod overview;
mod products;
mod sales;
mod settings;
mod users;

pub use analytics::AnalyticsPage;
pub use not_found::NotFound;
pub use orders::OrdersPage;
pub use overview::OverviewPage;
pub use products::ProductsPage;
pub use sales::SalesPage;
pub use settings::SettingsPage;
pub use users::UsersPage;

pub(crate) const MAIN_STYLE: &str = "max-width: 1280px; margin: 0 auto; padding: 24px 32px;";
pub(crate) const CHART_GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px; margin-bottom: 32px;";

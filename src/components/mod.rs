//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod metric_card;
pub mod navbar;
pub mod pagination;
pub mod pie_chart;
pub mod sidebar;
pub mod toast;

pub use chart::LineChart;
pub use metric_card::MetricCard;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use pie_chart::DonutChart;
pub use sidebar::Sidebar;
pub use toast::Toast;

//! Solar overview dashboard: projects, investigations, work orders and the
//! summary counters, fetched together as one refresh cycle.

pub mod api;
pub mod hook;
pub mod loader;
pub mod state;
pub mod ui;

pub use hook::{use_dashboard_data, use_dashboard_data_with, DashboardResource};
pub use loader::{load_dashboard, run_refresh_cycle};
pub use state::{describe_error, DashboardData, DashboardState, DashboardStore};

mod dashboard;

pub use dashboard::SolarOverviewDashboard;

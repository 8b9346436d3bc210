pub mod d100_solar_overview;

pub use d100_solar_overview::ui::SolarOverviewDashboard;

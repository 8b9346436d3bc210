pub mod d100_solar_overview;

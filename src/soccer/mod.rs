//! Soccer statistics from football-data.org (v4 API)
//!
//! - `http`: typed endpoint calls
//! - `types`: wire types
//! - `compute`: standings, scorers, team match log and record
//! - `sections`: report sections built from fetched data

pub mod compute;
pub mod http;
pub mod sections;
pub mod types;

pub use http::FootballDataClient;

/// "2023/24" style label for a season starting in `year`.
pub fn season_label(year: u16) -> String {
    format!("{}/{:02}", year, (year + 1) % 100)
}

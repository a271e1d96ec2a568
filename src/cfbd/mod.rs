//! College Football Data API (<https://collegefootballdata.com>)
//!
//! - `http`: typed endpoint calls
//! - `types`: wire types
//! - `compute`: pivots, schedule rows, team summary, leaderboards
//! - `sections`: report sections built from fetched data

pub mod compute;
pub mod http;
pub mod sections;
pub mod types;

pub use http::CfbdClient;

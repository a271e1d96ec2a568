//! Sports statistics dashboard library
//!
//! Fetches college football stats from the College Football Data API and
//! soccer stats from football-data.org (or generates placeholder data),
//! aggregates them into sums, per-game averages and top-N rankings, and
//! renders the result as text, JSON or an interactive terminal dashboard.
//!
//! ## Features
//!
//! - **College football**: team season stats, schedule and results, top
//!   passers/rushers/receivers, player search
//! - **Soccer**: standings, top scorers, a team's match log and trends
//! - **Demo data**: seeded random seasons for both sports, no API key needed
//! - **Response cache**: in-memory LRU backed by JSON files on disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sports_dash::{cfbd::{sections::load_report, CfbdClient}, core::UnifiedCache, Season};
//!
//! # async fn example() -> sports_dash::Result<()> {
//! let client = CfbdClient::new(
//!     "https://api.collegefootballdata.com",
//!     "my-api-key",
//!     UnifiedCache::in_memory(64),
//! )?;
//! let sections = load_report(&client, "Alabama", Season::new(2023), None, 5).await;
//! println!("{}", sports_dash::report::text::render_sections(&sections, 100));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CFBD_API_KEY=...
//! export FOOTBALL_DATA_API_KEY=...
//! ```

pub mod analysis;
pub mod cfbd;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod demo;
pub mod error;
pub mod report;
pub mod soccer;

// Re-export commonly used types
pub use cli::types::{
    ids::{CompetitionCode, PlayerId, TeamId},
    time::Season,
};
pub use error::{DashError, Result};

pub const CFBD_API_KEY_ENV_VAR: &str = "CFBD_API_KEY";
pub const CFBD_BASE_URL_ENV_VAR: &str = "CFBD_BASE_URL";
pub const FOOTBALL_DATA_API_KEY_ENV_VAR: &str = "FOOTBALL_DATA_API_KEY";
pub const FOOTBALL_DATA_BASE_URL_ENV_VAR: &str = "FOOTBALL_DATA_BASE_URL";
pub const CACHE_DIR_ENV_VAR: &str = "SPORTS_DASH_CACHE_DIR";

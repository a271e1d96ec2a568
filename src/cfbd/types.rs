//! Wire types for the College Football Data API.
//!
//! Field names changed from snake_case to camelCase between API versions,
//! so game fields accept both spellings.

use serde::{Deserialize, Serialize};

use crate::cli::types::ids::PlayerId;
use crate::core::de::{de_flex_f64, de_opt_flex_u32};


/// FBS team as returned by `/teams/fbs`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<u32>,
    pub school: String,
    #[serde(default)]
    pub mascot: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
}

/// One `{statName, statValue}` row from `/stats/season`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamSeasonStat {
    #[serde(default)]
    pub season: Option<u16>,
    pub team: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(rename = "statName")]
    pub stat_name: String,
    #[serde(rename = "statValue", deserialize_with = "de_flex_f64")]
    pub stat_value: f64,
}

/// Game from `/games`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default, alias = "seasonType")]
    pub season_type: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "neutralSite")]
    pub neutral_site: Option<bool>,
    #[serde(alias = "homeTeam")]
    pub home_team: String,
    #[serde(alias = "awayTeam")]
    pub away_team: String,
    #[serde(default, alias = "homePoints", deserialize_with = "de_opt_flex_u32")]
    pub home_points: Option<u32>,
    #[serde(default, alias = "awayPoints", deserialize_with = "de_opt_flex_u32")]
    pub away_points: Option<u32>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl Game {
    /// Final score as `(home, away)` when the game has been played.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        if self.completed == Some(false) {
            return None;
        }
        Some((self.home_points?, self.away_points?))
    }
}

/// Long-format player stat row from `/stats/player/season`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerStatRow {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub player: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    pub category: String,
    #[serde(rename = "statType")]
    pub stat_type: String,
    #[serde(deserialize_with = "de_flex_f64")]
    pub stat: f64,
}

/// Hit from `/player/search`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerSearchResult {
    pub id: PlayerId,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, rename = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_opt_flex_u32")]
    pub jersey: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_flex_u32")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_flex_u32")]
    pub weight: Option<u32>,
    #[serde(default)]
    pub hometown: Option<String>,
}

impl PlayerSearchResult {
    /// "First Last", falling back to the combined name field.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.name.clone().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

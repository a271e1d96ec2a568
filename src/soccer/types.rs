//! Wire types for football-data.org v4.

use serde::Deserialize;

use crate::cli::types::ids::TeamId;
use crate::core::de::de_null_string;


#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<TeamId>,
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
    #[serde(default, rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(default)]
    pub tla: Option<String>,
}

impl TeamRef {
    /// Short name when available, else the full name.
    pub fn label(&self) -> &str {
        self.short_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Case-insensitive match on name, short name or three-letter code.
    pub fn matches_exactly(&self, query: &str) -> bool {
        let q = query.trim();
        self.name.eq_ignore_ascii_case(q)
            || self.short_name.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(q))
            || self.tla.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(q))
    }

    /// Case-insensitive substring match on the full name.
    pub fn matches_partially(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        !q.is_empty() && self.name.to_lowercase().contains(&q)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitionRef {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub competition: Option<CompetitionRef>,
    #[serde(default)]
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Standing {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub position: u32,
    pub team: TeamRef,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "de_null_string")]
    pub name: String,
    #[serde(default)]
    pub nationality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScorersResponse {
    #[serde(default)]
    pub competition: Option<CompetitionRef>,
    #[serde(default)]
    pub scorers: Vec<Scorer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorer {
    pub player: PlayerRef,
    pub team: TeamRef,
    #[serde(default)]
    pub played_matches: Option<u32>,
    #[serde(default)]
    pub goals: Option<u32>,
    #[serde(default)]
    pub assists: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchesResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: Option<u64>,
    pub utc_date: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub matchday: Option<u32>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default)]
    pub winner: Option<String>,
    pub full_time: ScoreLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoreLine {
    #[serde(default)]
    pub home: Option<u32>,
    #[serde(default)]
    pub away: Option<u32>,
}

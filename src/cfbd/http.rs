//! HTTP calls against the College Football Data API

use serde_json::Value;
use tracing::debug;

use crate::{
    cfbd::types::{Game, PlayerSearchResult, PlayerStatRow, Team, TeamSeasonStat},
    cli::types::{options::SeasonType, time::Season},
    core::{ApiCacheKey, ApiClient, AuthScheme, CachePolicy, UnifiedCache},
    Result,
};

#[cfg(test)]
mod tests;

pub const SERVICE: &str = "CFBD";

/// Typed client for the CFBD endpoints the dashboard uses.
#[derive(Clone)]
pub struct CfbdClient {
    api: ApiClient,
}

impl CfbdClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        cache: UnifiedCache<ApiCacheKey, Value>,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(SERVICE, base_url, AuthScheme::Bearer, api_key, cache)?,
        })
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.api.set_policy(policy);
        self
    }

    pub fn set_policy(&mut self, policy: CachePolicy) {
        self.api.set_policy(policy);
    }

    /// FBS teams for a season, sorted by school name.
    pub async fn get_fbs_teams(&self, year: Season) -> Result<Vec<Team>> {
        let mut teams: Vec<Team> = self
            .api
            .get_json("/teams/fbs", &[("year", year.to_string())])
            .await?;
        teams.sort_by(|a, b| a.school.cmp(&b.school));
        debug!(count = teams.len(), %year, "FBS teams loaded");
        Ok(teams)
    }

    pub async fn get_team_season_stats(
        &self,
        year: Season,
        team: &str,
    ) -> Result<Vec<TeamSeasonStat>> {
        self.api
            .get_json(
                "/stats/season",
                &[("year", year.to_string()), ("team", team.to_string())],
            )
            .await
    }

    pub async fn get_games(
        &self,
        year: Season,
        team: &str,
        season_type: SeasonType,
    ) -> Result<Vec<Game>> {
        self.api
            .get_json(
                "/games",
                &[
                    ("year", year.to_string()),
                    ("team", team.to_string()),
                    ("seasonType", season_type.as_query().to_string()),
                ],
            )
            .await
    }

    pub async fn get_player_season_stats(
        &self,
        year: Season,
        team: &str,
    ) -> Result<Vec<PlayerStatRow>> {
        self.api
            .get_json(
                "/stats/player/season",
                &[("year", year.to_string()), ("team", team.to_string())],
            )
            .await
    }

    /// Search players by name; `year` narrows to rosters of that season.
    pub async fn player_search(
        &self,
        term: &str,
        year: Option<Season>,
    ) -> Result<Vec<PlayerSearchResult>> {
        let mut query = vec![("searchTerm", term.trim().to_string())];
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }
        self.api.get_json("/player/search", &query).await
    }
}

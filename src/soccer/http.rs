//! HTTP calls against football-data.org (v4)

use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{ids::CompetitionCode, ids::TeamId, time::Season},
    core::{ApiCacheKey, ApiClient, AuthScheme, CachePolicy, UnifiedCache},
    soccer::types::{Match, MatchesResponse, ScorersResponse, StandingsResponse},
    Result,
};


pub const SERVICE: &str = "football-data.org";

/// Header football-data.org reads the API token from.
pub const AUTH_HEADER: &str = "x-auth-token";

#[derive(Clone)]
pub struct FootballDataClient {
    api: ApiClient,
}

impl FootballDataClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        cache: UnifiedCache<ApiCacheKey, Value>,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(
                SERVICE,
                base_url,
                AuthScheme::Header(AUTH_HEADER),
                api_key,
                cache,
            )?,
        })
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.api.set_policy(policy);
        self
    }

    pub fn set_policy(&mut self, policy: CachePolicy) {
        self.api.set_policy(policy);
    }

    pub async fn get_standings(
        &self,
        competition: &CompetitionCode,
        season: Season,
    ) -> Result<StandingsResponse> {
        self.api
            .get_json(
                &format!("/competitions/{competition}/standings"),
                &[("season", season.to_string())],
            )
            .await
    }

    pub async fn get_scorers(
        &self,
        competition: &CompetitionCode,
        season: Season,
        limit: usize,
    ) -> Result<ScorersResponse> {
        self.api
            .get_json(
                &format!("/competitions/{competition}/scorers"),
                &[("season", season.to_string()), ("limit", limit.to_string())],
            )
            .await
    }

    /// Finished matches of one team in one competition.
    pub async fn get_team_matches(
        &self,
        team: TeamId,
        competition: &CompetitionCode,
        season: Season,
    ) -> Result<Vec<Match>> {
        let resp: MatchesResponse = self
            .api
            .get_json(
                &format!("/teams/{team}/matches"),
                &[
                    ("season", season.to_string()),
                    ("competitions", competition.to_string()),
                    ("status", "FINISHED".to_string()),
                ],
            )
            .await?;
        debug!(count = resp.matches.len(), %team, "matches loaded");
        Ok(resp.matches)
    }
}

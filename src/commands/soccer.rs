//! `soccer` subcommands.

use tracing::info;

use super::{emit, resolve_api_key, response_cache, validate_limit};
use crate::{
    cli::SoccerCmd,
    config::Config,
    core::CachePolicy,
    report::Section,
    soccer::{sections, FootballDataClient},
    Result, FOOTBALL_DATA_API_KEY_ENV_VAR,
};

pub fn football_data_client(
    config: &Config,
    api_key: Option<String>,
    policy: CachePolicy,
) -> Result<FootballDataClient> {
    let key = resolve_api_key(api_key, &config.football_data, FOOTBALL_DATA_API_KEY_ENV_VAR)?;
    Ok(
        FootballDataClient::new(&config.football_data.base_url, &key, response_cache(config))?
            .with_policy(policy),
    )
}

/// Sections for one `soccer` subcommand.
pub async fn soccer_sections(cmd: &SoccerCmd, client: &FootballDataClient) -> Result<Vec<Section>> {
    let sections = match cmd {
        SoccerCmd::Standings { scope, limit, .. } => vec![
            sections::load_standings(client, &scope.competition, scope.season, validate_limit(*limit)?)
                .await,
        ],
        SoccerCmd::Scorers { scope, limit, .. } => vec![
            sections::load_scorers(client, &scope.competition, scope.season, validate_limit(*limit)?)
                .await,
        ],
        SoccerCmd::Team { scope, team, .. } => {
            vec![sections::load_team(client, &scope.competition, scope.season, team).await]
        }
        SoccerCmd::Report {
            scope, team, limit, ..
        } => {
            sections::load_report(
                client,
                &scope.competition,
                scope.season,
                team,
                validate_limit(*limit)?,
            )
            .await
        }
    };
    Ok(sections)
}

pub async fn handle_soccer(cmd: SoccerCmd, config: &Config) -> Result<()> {
    let api = cmd.api().clone();
    let policy = api.cache_policy();
    let client = football_data_client(config, api.api_key, policy)?;
    info!(base_url = %config.football_data.base_url, ?policy, "running soccer command");

    // tarpaulin::skip - HTTP call, tested via soccer_sections with a mock server
    let sections = soccer_sections(&cmd, &client).await?;
    emit(&sections, api.json)
}

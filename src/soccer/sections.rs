//! Report sections for the soccer views.

use crate::{
    cli::types::{ids::CompetitionCode, time::Season},
    error::DashError,
    report::{failure_message, BarSeries, Panel, Section, TableData},
    soccer::{
        compute::{
            find_team, goals_trend, match_rows, points_bars, points_trend, standing_rows,
            top_scorers, total_table, TeamRecord,
        },
        season_label,
        types::{CompetitionRef, Match, ScorersResponse, StandingsResponse, TeamRef},
        FootballDataClient,
    },
    Result,
};


/// Competition display name, falling back to its code.
pub fn competition_name(competition: Option<&CompetitionRef>, code: &CompetitionCode) -> String {
    competition
        .map(|c| c.name.trim())
        .filter(|n| !n.is_empty())
        .map(String::from)
        .unwrap_or_else(|| code.to_string())
}

pub fn standings_section(
    code: &CompetitionCode,
    season: Season,
    standings: Result<StandingsResponse>,
    limit: usize,
) -> Section {
    let label = season_label(season.0);
    let resp = match standings {
        Ok(resp) => resp,
        Err(e) => {
            return Section::message(
                format!("{code} Standings {label}"),
                failure_message("standings", &e),
            )
        }
    };
    let title = format!(
        "{} Standings {label}",
        competition_name(resp.competition.as_ref(), code)
    );

    let rows = standing_rows(&resp);
    if rows.is_empty() {
        return Section::message(title, format!("No standings available for {label}."));
    }
    Section::new(title)
        .with(Panel::Table(TableData::from_rows(&rows)))
        .with(Panel::Bars(points_bars(&rows, limit)))
}

pub fn scorers_section(
    code: &CompetitionCode,
    season: Season,
    scorers: Result<ScorersResponse>,
    limit: usize,
) -> Section {
    let label = season_label(season.0);
    let resp = match scorers {
        Ok(resp) => resp,
        Err(e) => {
            return Section::message(
                format!("{code} Top Scorers {label}"),
                failure_message("scorers", &e),
            )
        }
    };
    let title = format!(
        "{} Top Scorers {label}",
        competition_name(resp.competition.as_ref(), code)
    );

    let rows = top_scorers(&resp.scorers, limit);
    if rows.is_empty() {
        return Section::message(title, format!("No scorers listed for {label}."));
    }
    let bars = BarSeries::new(
        rows.iter()
            .map(|r| (r.player.clone(), r.goals as f64))
            .collect(),
    );
    Section::new(title)
        .with(Panel::Table(TableData::from_rows(&rows)))
        .with(Panel::Bars(bars))
}

/// Resolve a team query against the standings, or the message to show instead.
pub fn resolve_team(
    standings: &Result<StandingsResponse>,
    query: &str,
) -> std::result::Result<TeamRef, String> {
    match standings {
        Err(e) => Err(failure_message("standings", e)),
        Ok(resp) => find_team(&total_table(resp), query).cloned().ok_or_else(|| {
            DashError::TeamNotFound {
                name: query.trim().to_string(),
            }
            .to_string()
        }),
    }
}

/// Record, match log and trends for one team.
pub fn team_section(
    competition: &str,
    season: Season,
    team: &TeamRef,
    matches: Result<Vec<Match>>,
) -> Section {
    let label = season_label(season.0);
    let title = format!("{} in {competition} {label}", team.label());
    let Some(team_id) = team.id else {
        return Section::message(title, format!("{} has no team id.", team.label()));
    };
    let matches = match matches {
        Ok(m) => m,
        Err(e) => return Section::message(title, failure_message("matches", &e)),
    };

    let rows = match_rows(&matches, team_id);
    if rows.is_empty() {
        return Section::message(
            title,
            format!("No finished matches for {} in {label}.", team.label()),
        );
    }

    let record = TeamRecord::from_rows(&rows);
    let fmt_avg = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "n/a".into());
    let facts = vec![
        (
            "Record".to_string(),
            format!("{}-{}-{}", record.won, record.drawn, record.lost),
        ),
        ("Played".to_string(), record.played.to_string()),
        ("Goals for".to_string(), record.goals_for.to_string()),
        ("Goals against".to_string(), record.goals_against.to_string()),
        ("Goal difference".to_string(), format!("{:+}", record.goal_difference())),
        ("Points".to_string(), record.points.to_string()),
        ("Goals per game".to_string(), fmt_avg(record.goals_per_game())),
        (
            "Goals conceded per game".to_string(),
            fmt_avg(record.goals_against_per_game()),
        ),
    ];

    Section::new(title)
        .with(Panel::Facts { items: facts })
        .with(Panel::Table(TableData::from_rows(&rows)))
        .with(Panel::Trend(goals_trend(&rows)))
        .with(Panel::Trend(points_trend(&rows)))
}

pub async fn load_standings(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
    limit: usize,
) -> Section {
    standings_section(code, season, client.get_standings(code, season).await, limit)
}

pub async fn load_scorers(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
    limit: usize,
) -> Section {
    scorers_section(
        code,
        season,
        client.get_scorers(code, season, limit).await,
        limit,
    )
}

/// Team names from the standings, for option lists.
pub async fn load_team_names(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
) -> Result<Vec<String>> {
    let resp = client.get_standings(code, season).await?;
    Ok(standing_rows(&resp).into_iter().map(|r| r.team).collect())
}

async fn team_from_standings(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
    query: &str,
    standings: &Result<StandingsResponse>,
) -> Section {
    let competition = competition_name(
        standings.as_ref().ok().and_then(|r| r.competition.as_ref()),
        code,
    );
    match resolve_team(standings, query) {
        Err(message) => Section::message(
            format!("{} in {competition} {}", query.trim(), season_label(season.0)),
            message,
        ),
        Ok(team) => {
            let matches = match team.id {
                Some(id) => client.get_team_matches(id, code, season).await,
                None => Ok(Vec::new()),
            };
            team_section(&competition, season, &team, matches)
        }
    }
}

pub async fn load_team(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
    query: &str,
) -> Section {
    let standings = client.get_standings(code, season).await;
    team_from_standings(client, code, season, query, &standings).await
}

/// Standings, top scorers and the selected team's season.
pub async fn load_report(
    client: &FootballDataClient,
    code: &CompetitionCode,
    season: Season,
    team: &str,
    limit: usize,
) -> Vec<Section> {
    let (standings, scorers) = tokio::join!(
        client.get_standings(code, season),
        client.get_scorers(code, season, limit),
    );
    let team_section = team_from_standings(client, code, season, team, &standings).await;
    vec![
        standings_section(code, season, standings, limit),
        scorers_section(code, season, scorers, limit),
        team_section,
    ]
}

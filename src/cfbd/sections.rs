//! Report sections for the college football views.
//!
//! Builders take the fetch results (not the client) so that empty payloads
//! and API failures can be turned into user-visible messages in one place.

use crate::{
    cfbd::{
        compute::{
            key_stat_bars, leaderboard, pivot_player_stats, pivot_team_stats, points_trend,
            schedule_rows, stat_lines, summarize_team,
        },
        types::{Game, PlayerSearchResult, PlayerStatRow, Team, TeamSeasonStat},
        CfbdClient,
    },
    cli::types::{
        options::{LeaderCategory, SeasonType},
        time::Season,
    },
    report::{failure_message, CellValue, Panel, Section, TableData, Tabular},
    Result,
};


pub const NO_PLAYER_FOUND: &str = "No player found with that name.";

impl Tabular for Team {
    fn columns() -> Vec<&'static str> {
        vec!["school", "mascot", "abbreviation", "conference"]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.school.as_str().into(),
            self.mascot.clone().into(),
            self.abbreviation.clone().into(),
            self.conference.clone().into(),
        ]
    }
}

pub fn teams_section(year: Season, teams: Result<Vec<Team>>) -> Section {
    let title = format!("FBS Teams for {year}");
    match teams {
        Err(e) => Section::message(title, failure_message("teams", &e)),
        Ok(teams) if teams.is_empty() => {
            Section::message(title, format!("No FBS teams found for {year}."))
        }
        Ok(teams) => Section::new(title).with(Panel::Table(TableData::from_rows(&teams))),
    }
}

/// Team season stats: summary facts, key-stat bar chart, full stat table.
pub fn team_stats_section(
    team: &str,
    year: Season,
    stats: Result<Vec<TeamSeasonStat>>,
    games: Result<Vec<Game>>,
) -> Section {
    let title = format!("{team} Team Stats for {year}");
    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => return Section::message(title, failure_message("team season stats", &e)),
    };
    if stats.is_empty() {
        return Section::message(title, format!("No season stats found for {team} in {year}."));
    }

    // Points come from the schedule; a failed schedule still leaves the yardage view.
    let (rows, games_note) = match games {
        Ok(games) => (schedule_rows(&games, team), None),
        Err(e) => (Vec::new(), Some(failure_message("game results", &e))),
    };
    let summary = summarize_team(team, pivot_team_stats(&stats), &rows);

    let fmt_avg = |v: Option<f64>| v.map(|v| format!("{v:.1}")).unwrap_or_else(|| "n/a".into());
    let mut facts = vec![
        ("Record".to_string(), summary.record()),
        ("Games played".to_string(), summary.games.to_string()),
        ("Points for".to_string(), format!("{:.0}", summary.points_for)),
        ("Points against".to_string(), format!("{:.0}", summary.points_against)),
        ("Point differential".to_string(), format!("{:+.0}", summary.point_differential())),
        ("Points per game".to_string(), fmt_avg(summary.points_per_game())),
        ("Points allowed per game".to_string(), fmt_avg(summary.points_allowed_per_game())),
    ];
    if let Some(ypg) = summary.stat_per_game("totalYards") {
        facts.push(("Yards per game".to_string(), format!("{ypg:.1}")));
    }

    let mut section = Section::new(title)
        .with(Panel::Facts { items: facts })
        .with(Panel::Bars(key_stat_bars(&summary)))
        .with(Panel::Table(TableData::from_rows(&stat_lines(&summary))));
    if !rows.iter().any(|r| r.is_played()) {
        section = section.with(Panel::Message("No completed games yet.".to_string()));
    } else {
        section = section.with(Panel::Trend(points_trend(&rows)));
    }
    if let Some(note) = games_note {
        section = section.with(Panel::Message(note));
    }
    section
}

pub fn schedule_section(team: &str, year: Season, games: Result<Vec<Game>>) -> Section {
    let title = format!("{team} Schedule and Results for {year}");
    match games {
        Err(e) => Section::message(title, failure_message("schedule", &e)),
        Ok(games) if games.is_empty() => {
            Section::message(title, format!("No games found for {team} in {year}."))
        }
        Ok(games) => {
            let rows = schedule_rows(&games, team);
            Section::new(title).with(Panel::Table(TableData::from_rows(&rows)))
        }
    }
}

/// One section per requested category, each a top-`limit` table.
pub fn leader_sections(
    team: &str,
    year: Season,
    rows: Result<Vec<PlayerStatRow>>,
    categories: &[LeaderCategory],
    limit: usize,
) -> Vec<Section> {
    let rows = match rows {
        Ok(rows) => rows,
        Err(e) => {
            return vec![Section::message(
                format!("Top Players for {team} in {year}"),
                failure_message("player stats", &e),
            )]
        }
    };
    if rows.is_empty() {
        return vec![Section::message(
            format!("Top Players for {team} in {year}"),
            format!("No player stats found for {team} in {year}."),
        )];
    }

    let lines = pivot_player_stats(&rows);
    categories
        .iter()
        .map(|category| {
            Section::new(format!("{} ({team}, {year})", category.title()))
                .with(Panel::Table(leaderboard(&lines, *category, limit)))
        })
        .collect()
}

/// Details of the first search hit plus that player's season lines.
pub fn player_search_section(
    term: &str,
    year: Season,
    hits: Result<Vec<PlayerSearchResult>>,
    stats: Option<Result<Vec<PlayerStatRow>>>,
) -> Section {
    let title = format!("Player Search: {term}");
    let hits = match hits {
        Ok(hits) => hits,
        Err(e) => return Section::message(title, failure_message("player search", &e)),
    };
    let Some(player) = hits.first() else {
        return Section::message(title, NO_PLAYER_FOUND);
    };

    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    let mut section = Section::new(title).with(Panel::Facts {
        items: vec![
            ("Name".to_string(), player.display_name()),
            ("Team".to_string(), or_dash(player.team.clone())),
            ("Position".to_string(), or_dash(player.position.clone())),
            ("Jersey".to_string(), or_dash(player.jersey.map(|j| j.to_string()))),
        ],
    });
    if hits.len() > 1 {
        section = section.with(Panel::Message(format!(
            "{} more players matched; showing the first.",
            hits.len() - 1
        )));
    }

    match stats {
        None => {
            section = section.with(Panel::Message(format!(
                "No team on record for {}, so season stats are unavailable.",
                player.display_name()
            )))
        }
        Some(Err(e)) => {
            section = section.with(Panel::Message(failure_message("player season stats", &e)))
        }
        Some(Ok(rows)) => {
            let own: Vec<PlayerStatRow> = rows
                .into_iter()
                .filter(|r| r.player_id == player.id)
                .collect();
            let lines = pivot_player_stats(&own);
            section = if lines.is_empty() {
                section.with(Panel::Message(format!(
                    "No {year} season stats for {}.",
                    player.display_name()
                )))
            } else {
                section.with(Panel::Table(TableData::from_rows(&lines)))
            };
        }
    }
    section
}

pub async fn load_teams(client: &CfbdClient, year: Season) -> Section {
    teams_section(year, client.get_fbs_teams(year).await)
}

pub async fn load_team_stats(client: &CfbdClient, team: &str, year: Season) -> Section {
    let (stats, games) = tokio::join!(
        client.get_team_season_stats(year, team),
        client.get_games(year, team, SeasonType::Regular),
    );
    team_stats_section(team, year, stats, games)
}

pub async fn load_schedule(
    client: &CfbdClient,
    team: &str,
    year: Season,
    season_type: SeasonType,
) -> Section {
    schedule_section(team, year, client.get_games(year, team, season_type).await)
}

pub async fn load_leaders(
    client: &CfbdClient,
    team: &str,
    year: Season,
    categories: &[LeaderCategory],
    limit: usize,
) -> Vec<Section> {
    let rows = client.get_player_season_stats(year, team).await;
    leader_sections(team, year, rows, categories, limit)
}

pub async fn load_player_search(client: &CfbdClient, term: &str, year: Season) -> Section {
    let hits = client.player_search(term, Some(year)).await;
    let stats = match hits.as_ref().ok().and_then(|h| h.first()) {
        Some(PlayerSearchResult {
            team: Some(team), ..
        }) => Some(client.get_player_season_stats(year, team).await),
        _ => None,
    };
    player_search_section(term, year, hits, stats)
}

/// Everything the single-page report shows for one team.
pub async fn load_report(
    client: &CfbdClient,
    team: &str,
    year: Season,
    player: Option<&str>,
    limit: usize,
) -> Vec<Section> {
    let (team_stats, schedule, leaders) = tokio::join!(
        load_team_stats(client, team, year),
        load_schedule(client, team, year, SeasonType::Regular),
        load_leaders(client, team, year, &LeaderCategory::ALL, limit),
    );

    let mut sections = vec![team_stats, schedule];
    sections.extend(leaders);
    if let Some(term) = player.filter(|t| !t.trim().is_empty()) {
        sections.push(load_player_search(client, term, year).await);
    }
    sections
}

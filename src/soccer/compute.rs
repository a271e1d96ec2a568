use chrono::DateTime;
use serde::Serialize;

use crate::{
    analysis::{cumulative, per_game, sum_by, top_n},
    cli::types::ids::TeamId,
    report::{BarSeries, CellValue, Tabular, TrendSeries},
    soccer::types::{Match, Scorer, Standing, StandingsResponse, TableEntry, TeamRef},
};

#[cfg(test)]
mod tests;

/// League table row with per-game goal rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub position: u32,
    pub team_id: Option<TeamId>,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Group name for group-stage competitions, e.g. `Group A`.
    pub group: Option<String>,
}

impl StandingRow {
    pub fn in_group(mut self, group: Option<&str>) -> Self {
        self.group = group.map(group_label);
        self
    }

    pub fn goals_for_per_game(&self) -> Option<f64> {
        per_game(self.goals_for as f64, self.played)
    }

    pub fn goals_against_per_game(&self) -> Option<f64> {
        per_game(self.goals_against as f64, self.played)
    }

    pub fn points_per_game(&self) -> Option<f64> {
        per_game(self.points as f64, self.played)
    }
}

impl From<&TableEntry> for StandingRow {
    fn from(e: &TableEntry) -> Self {
        Self {
            position: e.position,
            team_id: e.team.id,
            team: e.team.label().to_string(),
            played: e.played_games,
            won: e.won,
            draw: e.draw,
            lost: e.lost,
            goals_for: e.goals_for,
            goals_against: e.goals_against,
            goal_difference: e.goal_difference,
            points: e.points,
            group: None,
        }
    }
}

/// `GROUP_A` -> `Group A`.
pub fn group_label(raw: &str) -> String {
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Tabular for StandingRow {
    fn columns() -> Vec<&'static str> {
        vec![
            "pos", "team", "played", "won", "draw", "lost", "gf", "ga", "gd", "points", "gf_pg",
            "ga_pg",
            "group",
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.position.into(),
            self.team.as_str().into(),
            self.played.into(),
            self.won.into(),
            self.draw.into(),
            self.lost.into(),
            self.goals_for.into(),
            self.goals_against.into(),
            CellValue::Int(self.goal_difference as i64),
            self.points.into(),
            self.goals_for_per_game().into(),
            self.goals_against_per_game().into(),
            self.group.clone().into(),
        ]
    }
}

/// The overall ("TOTAL") tables in payload order, falling back to the first
/// table returned. Group-stage competitions carry one per group.
pub fn total_tables(resp: &StandingsResponse) -> Vec<&Standing> {
    let totals: Vec<&Standing> = resp
        .standings
        .iter()
        .filter(|s| s.kind.as_deref() == Some("TOTAL"))
        .collect();
    if totals.is_empty() {
        resp.standings.first().into_iter().collect()
    } else {
        totals
    }
}

/// Every entry of the overall tables, groups concatenated.
pub fn total_table(resp: &StandingsResponse) -> Vec<&TableEntry> {
    total_tables(resp)
        .into_iter()
        .flat_map(|s| s.table.iter())
        .collect()
}

pub fn standing_rows(resp: &StandingsResponse) -> Vec<StandingRow> {
    total_tables(resp)
        .into_iter()
        .flat_map(|s| {
            s.table
                .iter()
                .map(move |e| StandingRow::from(e).in_group(s.group.as_deref()))
        })
        .collect()
}

/// Top `limit` teams by points as bars.
pub fn points_bars(rows: &[StandingRow], limit: usize) -> BarSeries {
    BarSeries::new(
        top_n(rows, limit, |r| r.points as f64)
            .into_iter()
            .map(|r| (r.team.clone(), r.points as f64))
            .collect(),
    )
}

/// Resolve a team by exact name/short name/TLA, then by substring.
pub fn find_team<'a>(entries: &[&'a TableEntry], query: &str) -> Option<&'a TeamRef> {
    let teams = || entries.iter().copied().map(|e| &e.team);
    teams()
        .find(|t| t.matches_exactly(query))
        .or_else(|| teams().find(|t| t.matches_partially(query)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerRow {
    pub player: String,
    pub team: String,
    pub played: Option<u32>,
    pub goals: u32,
    pub assists: Option<u32>,
    pub penalties: Option<u32>,
}

impl ScorerRow {
    pub fn goals_per_match(&self) -> Option<f64> {
        per_game(self.goals as f64, self.played?)
    }
}

impl From<&Scorer> for ScorerRow {
    fn from(s: &Scorer) -> Self {
        Self {
            player: s.player.name.clone(),
            team: s.team.label().to_string(),
            played: s.played_matches,
            goals: s.goals.unwrap_or(0),
            assists: s.assists,
            penalties: s.penalties,
        }
    }
}

impl Tabular for ScorerRow {
    fn columns() -> Vec<&'static str> {
        vec!["player", "team", "played", "goals", "assists", "penalties", "goals_pg"]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.player.as_str().into(),
            self.team.as_str().into(),
            self.played.into(),
            self.goals.into(),
            self.assists.into(),
            self.penalties.into(),
            self.goals_per_match().into(),
        ]
    }
}

/// Top `limit` scorers by goals.
pub fn top_scorers(scorers: &[Scorer], limit: usize) -> Vec<ScorerRow> {
    let rows: Vec<ScorerRow> = scorers.iter().map(ScorerRow::from).collect();
    top_n(&rows, limit, |r| r.goals as f64)
        .into_iter()
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn letter(&self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Draw => "D",
            Outcome::Loss => "L",
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            Outcome::Win => 3,
            Outcome::Draw => 1,
            Outcome::Loss => 0,
        }
    }
}

/// One finished match from the selected team's point of view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRow {
    pub date: String,
    pub matchday: Option<u32>,
    pub opponent: String,
    pub home: bool,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl MatchRow {
    /// `None` for matches without a full-time score or not involving `team`.
    pub fn from_match(m: &Match, team: TeamId) -> Option<Self> {
        let home = m.home_team.id == Some(team);
        if !home && m.away_team.id != Some(team) {
            return None;
        }
        let (h, a) = (m.score.full_time.home?, m.score.full_time.away?);
        let (goals_for, goals_against, opponent) = if home {
            (h, a, &m.away_team)
        } else {
            (a, h, &m.home_team)
        };
        Some(Self {
            date: DateTime::parse_from_rfc3339(&m.utc_date)
                .map(|dt| dt.date_naive().to_string())
                .unwrap_or_else(|_| m.utc_date.chars().take(10).collect()),
            matchday: m.matchday,
            opponent: opponent.label().to_string(),
            home,
            goals_for,
            goals_against,
        })
    }

    pub fn outcome(&self) -> Outcome {
        match self.goals_for.cmp(&self.goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn score(&self) -> String {
        if self.home {
            format!("{}-{}", self.goals_for, self.goals_against)
        } else {
            format!("{}-{}", self.goals_against, self.goals_for)
        }
    }
}

impl Tabular for MatchRow {
    fn columns() -> Vec<&'static str> {
        vec!["date", "matchday", "opponent", "venue", "score", "result"]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.date.as_str().into(),
            self.matchday.into(),
            self.opponent.as_str().into(),
            if self.home { "home" } else { "away" }.into(),
            self.score().into(),
            self.outcome().letter().into(),
        ]
    }
}

/// Finished matches for `team`, oldest first.
pub fn match_rows(matches: &[Match], team: TeamId) -> Vec<MatchRow> {
    let mut rows: Vec<MatchRow> = matches
        .iter()
        .filter_map(|m| MatchRow::from_match(m, team))
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}

/// Season aggregates over a team's match log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecord {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl TeamRecord {
    pub fn from_rows(rows: &[MatchRow]) -> Self {
        let count = |o: Outcome| rows.iter().filter(|r| r.outcome() == o).count() as u32;
        Self {
            played: rows.len() as u32,
            won: count(Outcome::Win),
            drawn: count(Outcome::Draw),
            lost: count(Outcome::Loss),
            goals_for: sum_by(rows, |r| r.goals_for as f64) as u32,
            goals_against: sum_by(rows, |r| r.goals_against as f64) as u32,
            points: rows.iter().map(|r| r.outcome().points()).sum(),
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn goals_per_game(&self) -> Option<f64> {
        per_game(self.goals_for as f64, self.played)
    }

    pub fn goals_against_per_game(&self) -> Option<f64> {
        per_game(self.goals_against as f64, self.played)
    }
}

fn matchday_labels(rows: &[MatchRow]) -> Vec<String> {
    rows.iter()
        .map(|r| match r.matchday {
            Some(md) => format!("MD{md}"),
            None => r.date.clone(),
        })
        .collect()
}

/// Goals scored and conceded per match.
pub fn goals_trend(rows: &[MatchRow]) -> TrendSeries {
    TrendSeries::new(matchday_labels(rows))
        .line("goals for", rows.iter().map(|r| r.goals_for as f64).collect())
        .line(
            "goals against",
            rows.iter().map(|r| r.goals_against as f64).collect(),
        )
}

/// Running points total.
pub fn points_trend(rows: &[MatchRow]) -> TrendSeries {
    let per_match: Vec<f64> = rows.iter().map(|r| r.outcome().points() as f64).collect();
    TrendSeries::new(matchday_labels(rows)).line("points", cumulative(&per_match))
}

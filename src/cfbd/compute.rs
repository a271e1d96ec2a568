use chrono::DateTime;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::{
    analysis::{per_game, sum_by, top_n},
    cfbd::types::{Game, PlayerStatRow, TeamSeasonStat},
    cli::types::{ids::PlayerId, options::LeaderCategory},
    report::{BarSeries, CellValue, TableData, Tabular, TrendSeries},
};


/// Stats shown in the team bar chart, with their chart labels.
pub const KEY_STATS: [(&str, &str); 5] = [
    ("totalYards", "totalYards"),
    ("rushingYards", "rushingYards"),
    ("netPassingYards", "passingYards"),
    ("pointsFor", "pointsFor"),
    ("pointsAgainst", "pointsAgainst"),
];

/// Long `{statName, statValue}` rows into a name -> value map.
/// Repeated names are summed.
pub fn pivot_team_stats(stats: &[TeamSeasonStat]) -> BTreeMap<String, f64> {
    let mut map = BTreeMap::new();
    for s in stats {
        *map.entry(s.stat_name.clone()).or_insert(0.0) += s.stat_value;
    }
    map
}

/// `YYYY-MM-DD` from an RFC 3339 timestamp, or the raw prefix when it does not parse.
pub fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_else(|_| raw.chars().take(10).collect())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRow {
    pub date: String,
    pub week: Option<u32>,
    pub opponent: String,
    pub home: bool,
    /// `"{home_points}-{away_points}"`, empty when unplayed.
    pub result: String,
    pub winner: String,
    pub points_for: Option<u32>,
    pub points_against: Option<u32>,
}

impl GameRow {
    pub fn from_game(game: &Game, team: &str) -> Self {
        let home = game.home_team.eq_ignore_ascii_case(team);
        let opponent = if home {
            game.away_team.clone()
        } else {
            game.home_team.clone()
        };

        let (result, winner, points_for, points_against) = match game.final_score() {
            Some((h, a)) => {
                let winner = match h.cmp(&a) {
                    std::cmp::Ordering::Greater => game.home_team.clone(),
                    std::cmp::Ordering::Less => game.away_team.clone(),
                    std::cmp::Ordering::Equal => "Tie".to_string(),
                };
                let (pf, pa) = if home { (h, a) } else { (a, h) };
                (format!("{h}-{a}"), winner, Some(pf), Some(pa))
            }
            None => (String::new(), "TBD".to_string(), None, None),
        };

        Self {
            date: game.start_date.as_deref().map(display_date).unwrap_or_default(),
            week: game.week,
            opponent,
            home,
            result,
            winner,
            points_for,
            points_against,
        }
    }

    pub fn is_played(&self) -> bool {
        self.points_for.is_some()
    }

    pub fn margin(&self) -> Option<i64> {
        Some(self.points_for? as i64 - self.points_against? as i64)
    }
}

impl Tabular for GameRow {
    fn columns() -> Vec<&'static str> {
        vec!["date", "week", "opponent", "venue", "result", "winner", "margin"]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.date.as_str().into(),
            self.week.into(),
            self.opponent.as_str().into(),
            if self.home { "home" } else { "away" }.into(),
            self.result.as_str().into(),
            self.winner.as_str().into(),
            self.margin().into(),
        ]
    }
}

/// Schedule rows for `team`, ordered by kickoff (then week).
pub fn schedule_rows(games: &[Game], team: &str) -> Vec<GameRow> {
    let mut rows: Vec<GameRow> = games.iter().map(|g| GameRow::from_game(g, team)).collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.week.cmp(&b.week)));
    rows
}

/// Season summary combining API stats with results derived from games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub stats: BTreeMap<String, f64>,
}

impl TeamSummary {
    pub fn point_differential(&self) -> f64 {
        self.points_for - self.points_against
    }

    pub fn points_per_game(&self) -> Option<f64> {
        per_game(self.points_for, self.games)
    }

    pub fn points_allowed_per_game(&self) -> Option<f64> {
        per_game(self.points_against, self.games)
    }

    /// Per-game average of a season stat, using the API's game count when present.
    pub fn stat_per_game(&self, name: &str) -> Option<f64> {
        let games = self
            .stats
            .get("games")
            .map(|g| g.round() as u32)
            .filter(|g| *g > 0)
            .unwrap_or(self.games);
        per_game(*self.stats.get(name)?, games)
    }

    /// Stat lookup that also knows the game-derived points.
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            "pointsFor" => Some(self.points_for),
            "pointsAgainst" => Some(self.points_against),
            _ => self.stats.get(name).copied(),
        }
    }

    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

pub fn summarize_team(team: &str, stats: BTreeMap<String, f64>, rows: &[GameRow]) -> TeamSummary {
    let played: Vec<&GameRow> = rows.iter().filter(|r| r.is_played()).collect();
    let mut summary = TeamSummary {
        team: team.to_string(),
        games: played.len() as u32,
        wins: 0,
        losses: 0,
        ties: 0,
        points_for: sum_by(&played, |r| r.points_for.unwrap_or(0) as f64),
        points_against: sum_by(&played, |r| r.points_against.unwrap_or(0) as f64),
        stats,
    };
    for row in played {
        match row.margin() {
            Some(m) if m > 0 => summary.wins += 1,
            Some(m) if m < 0 => summary.losses += 1,
            _ => summary.ties += 1,
        }
    }
    summary
}

/// Bars for [`KEY_STATS`]; stats missing from the payload are left out.
pub fn key_stat_bars(summary: &TeamSummary) -> BarSeries {
    BarSeries::new(
        KEY_STATS
            .iter()
            .filter_map(|(name, label)| summary.value(name).map(|v| (label.to_string(), v)))
            .collect(),
    )
}

/// One row per stat name, with its per-game average.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub name: String,
    pub value: f64,
    pub per_game: Option<f64>,
}

impl Tabular for StatLine {
    fn columns() -> Vec<&'static str> {
        vec!["stat", "value", "per_game"]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.name.as_str().into(),
            self.value.into(),
            self.per_game.into(),
        ]
    }
}

pub fn stat_lines(summary: &TeamSummary) -> Vec<StatLine> {
    summary
        .stats
        .iter()
        .filter(|(name, _)| name.as_str() != "games")
        .map(|(name, value)| StatLine {
            name: name.clone(),
            value: *value,
            per_game: summary.stat_per_game(name),
        })
        .collect()
}

/// Points scored and allowed per played game, in schedule order.
pub fn points_trend(rows: &[GameRow]) -> TrendSeries {
    let played: Vec<&GameRow> = rows.iter().filter(|r| r.is_played()).collect();
    let labels = played
        .iter()
        .map(|r| match r.week {
            Some(w) => format!("W{w}"),
            None => r.date.clone(),
        })
        .collect();
    TrendSeries::new(labels)
        .line(
            "points for",
            played.iter().map(|r| r.points_for.unwrap_or(0) as f64).collect(),
        )
        .line(
            "points against",
            played
                .iter()
                .map(|r| r.points_against.unwrap_or(0) as f64)
                .collect(),
        )
}

/// One player's season line, pivoted out of the long-format rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSeasonLine {
    pub player_id: Option<PlayerId>,
    pub player: String,
    pub position: String,
    pub passing_yards: f64,
    pub passing_tds: f64,
    pub passing_int: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub rushing_att: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub receptions: f64,
}

impl PlayerSeasonLine {
    fn apply(&mut self, category: &str, stat_type: &str, value: f64) {
        let slot = match (
            category.to_ascii_lowercase().as_str(),
            stat_type.to_ascii_uppercase().as_str(),
        ) {
            ("passing", "YDS") => &mut self.passing_yards,
            ("passing", "TD") => &mut self.passing_tds,
            ("passing", "INT") => &mut self.passing_int,
            ("rushing", "YDS") => &mut self.rushing_yards,
            ("rushing", "TD") => &mut self.rushing_tds,
            ("rushing", "CAR") => &mut self.rushing_att,
            ("receiving", "YDS") => &mut self.receiving_yards,
            ("receiving", "TD") => &mut self.receiving_tds,
            ("receiving", "REC") => &mut self.receptions,
            _ => return,
        };
        *slot += value;
    }

    /// Leaderboard sort key for a category.
    pub fn yards(&self, category: LeaderCategory) -> f64 {
        match category {
            LeaderCategory::Passing => self.passing_yards,
            LeaderCategory::Rushing => self.rushing_yards,
            LeaderCategory::Receiving => self.receiving_yards,
        }
    }
}

fn count(v: f64) -> CellValue {
    CellValue::Int(v.round() as i64)
}

impl Tabular for PlayerSeasonLine {
    fn columns() -> Vec<&'static str> {
        vec![
            "player",
            "position",
            "passing_yards",
            "passing_tds",
            "passing_int",
            "rushing_yards",
            "rushing_tds",
            "rushing_att",
            "receiving_yards",
            "receiving_tds",
            "receptions",
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            self.player.as_str().into(),
            self.position.as_str().into(),
            count(self.passing_yards),
            count(self.passing_tds),
            count(self.passing_int),
            count(self.rushing_yards),
            count(self.rushing_tds),
            count(self.rushing_att),
            count(self.receiving_yards),
            count(self.receiving_tds),
            count(self.receptions),
        ]
    }
}

/// Pivot long-format rows into one line per player, in first-seen order.
/// Unknown categories and stat types are ignored.
pub fn pivot_player_stats(rows: &[PlayerStatRow]) -> Vec<PlayerSeasonLine> {
    let mut index: HashMap<PlayerId, usize> = HashMap::new();
    let mut lines: Vec<PlayerSeasonLine> = Vec::new();

    for row in rows {
        let i = *index.entry(row.player_id).or_insert_with(|| {
            lines.push(PlayerSeasonLine {
                player_id: Some(row.player_id),
                player: row.player.clone(),
                position: row.position.clone().unwrap_or_default(),
                ..Default::default()
            });
            lines.len() - 1
        });
        lines[i].apply(&row.category, &row.stat_type, row.stat);
    }

    lines
}

/// Columns shown for each leaderboard, after the player name.
pub fn leader_columns(category: LeaderCategory) -> [&'static str; 4] {
    match category {
        LeaderCategory::Passing => ["player", "passing_yards", "passing_tds", "passing_int"],
        LeaderCategory::Rushing => ["player", "rushing_yards", "rushing_tds", "rushing_att"],
        LeaderCategory::Receiving => ["player", "receiving_yards", "receiving_tds", "receptions"],
    }
}

/// Top `limit` players by the category's yards, reduced to its columns.
pub fn leaderboard(lines: &[PlayerSeasonLine], category: LeaderCategory, limit: usize) -> TableData {
    let top = top_n(lines, limit, |l| l.yards(category));
    TableData::from_rows(top).select(&leader_columns(category))
}

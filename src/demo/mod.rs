//! Placeholder data for running the reports without an API key.
//!
//! Observations are drawn from sport-specific uniform ranges with a seeded
//! [`StdRng`], so the same settings always produce the same season.

pub mod sections;

#[cfg(test)]
mod tests;

use chrono::{Days, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::{
    analysis::{mean_by, per_game, sum_by},
    cli::types::{options::Sport, time::Season},
    error::DashError,
    Result,
};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TEAMS: usize = 8;
pub const DEFAULT_WEEKS: u32 = 12;
pub const MAX_TEAMS: usize = 26;
pub const MAX_WEEKS: u32 = 52;

/// One generated stat with its inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

const CFB_METRICS: [Metric; 2] = [
    Metric {
        name: "yards",
        min: 150,
        max: 550,
    },
    Metric {
        name: "points",
        min: 0,
        max: 56,
    },
];

const SOCCER_METRICS: [Metric; 1] = [Metric {
    name: "goals",
    min: 0,
    max: 5,
}];

pub fn metrics(sport: Sport) -> &'static [Metric] {
    match sport {
        Sport::Cfb => &CFB_METRICS,
        Sport::Soccer => &SOCCER_METRICS,
    }
}

/// "Week" or "Matchday".
pub fn bucket_name(sport: Sport) -> &'static str {
    match sport {
        Sport::Cfb => "Week",
        Sport::Soccer => "Matchday",
    }
}

fn bucket_label(sport: Sport, bucket: u32) -> String {
    match sport {
        Sport::Cfb => format!("W{bucket}"),
        Sport::Soccer => format!("MD{bucket}"),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub sport: Sport,
    pub seed: u64,
    pub teams: usize,
    pub buckets: u32,
    pub season: Season,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            sport: Sport::default(),
            seed: DEFAULT_SEED,
            teams: DEFAULT_TEAMS,
            buckets: DEFAULT_WEEKS,
            season: Season::default(),
        }
    }
}

impl DemoSettings {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TEAMS).contains(&self.teams) {
            return Err(DashError::InvalidArgument {
                message: format!("teams must be between 1 and {MAX_TEAMS}"),
            });
        }
        if !(1..=MAX_WEEKS).contains(&self.buckets) {
            return Err(DashError::InvalidArgument {
                message: format!("weeks must be between 1 and {MAX_WEEKS}"),
            });
        }
        Ok(())
    }

    /// First bucket date: September 1st of the season year.
    pub fn season_start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.season.0 as i32, 9, 1).unwrap_or_default()
    }
}

/// Placeholder team names: "Team A", "Team B", ...
pub fn team_names(count: usize) -> Vec<String> {
    (b'A'..=b'Z')
        .take(count)
        .map(|c| format!("Team {}", c as char))
        .collect()
}

/// One team's values for one week or matchday, aligned with [`metrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub team: String,
    pub bucket: u32,
    pub label: String,
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

pub fn generate(settings: &DemoSettings) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let metrics = metrics(settings.sport);
    let start = settings.season_start();

    let mut out = Vec::with_capacity(settings.teams * settings.buckets as usize);
    for team in team_names(settings.teams) {
        for bucket in 1..=settings.buckets {
            let offset = Days::new(7 * u64::from(bucket - 1));
            out.push(Observation {
                team: team.clone(),
                bucket,
                label: bucket_label(settings.sport, bucket),
                date: start.checked_add_days(offset).unwrap_or(start),
                values: metrics
                    .iter()
                    .map(|m| rng.gen_range(m.min..=m.max) as f64)
                    .collect(),
            });
        }
    }
    debug!(
        sport = %settings.sport,
        seed = settings.seed,
        rows = out.len(),
        "generated demo observations"
    );
    out
}

/// Season totals for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTotals {
    pub team: String,
    pub games: u32,
    pub totals: Vec<f64>,
    pub means: Vec<Option<f64>>,
}

impl TeamTotals {
    pub fn per_game(&self, metric: usize) -> Option<f64> {
        per_game(*self.totals.get(metric)?, self.games)
    }
}

/// Totals and means per team, in first-seen team order.
pub fn team_totals(observations: &[Observation], metric_count: usize) -> Vec<TeamTotals> {
    let mut teams: Vec<&str> = Vec::new();
    for o in observations {
        if !teams.contains(&o.team.as_str()) {
            teams.push(&o.team);
        }
    }

    teams
        .into_iter()
        .map(|team| {
            let rows: Vec<&Observation> = observations.iter().filter(|o| o.team == team).collect();
            let value = |i: usize| move |o: &&Observation| o.values.get(i).copied().unwrap_or(0.0);
            TeamTotals {
                team: team.to_string(),
                games: rows.len() as u32,
                totals: (0..metric_count).map(|i| sum_by(&rows, value(i))).collect(),
                means: (0..metric_count).map(|i| mean_by(&rows, value(i))).collect(),
            }
        })
        .collect()
}

/// Observations of one team, ordered by bucket.
pub fn team_series<'a>(observations: &'a [Observation], team: &str) -> Vec<&'a Observation> {
    let mut rows: Vec<&Observation> = observations
        .iter()
        .filter(|o| o.team.eq_ignore_ascii_case(team.trim()))
        .collect();
    rows.sort_by_key(|o| o.bucket);
    rows
}

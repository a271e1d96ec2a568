//! Report sections over generated observations.

use crate::{
    analysis::{rolling_mean, top_n},
    demo::{bucket_name, generate, metrics, team_series, team_totals, DemoSettings, Observation},
    error::DashError,
    report::{BarSeries, CellValue, Panel, Section, TableData, TrendSeries},
};


pub const ROLLING_WINDOW: usize = 3;

fn sport_title(settings: &DemoSettings) -> String {
    format!("Demo {} {}", settings.sport, settings.season)
}

/// Totals and per-game averages for every team.
pub fn totals_section(settings: &DemoSettings, observations: &[Observation]) -> Section {
    let title = format!("{} Season Totals", sport_title(settings));
    if observations.is_empty() {
        return Section::message(title, "No observations generated.");
    }

    let metrics = metrics(settings.sport);
    let mut columns = vec!["team".to_string(), "games".to_string()];
    for m in metrics {
        columns.push(format!("total_{}", m.name));
        columns.push(format!("{}_per_game", m.name));
    }

    let rows = team_totals(observations, metrics.len())
        .iter()
        .map(|t| {
            let mut cells: Vec<CellValue> = vec![t.team.as_str().into(), t.games.into()];
            for (i, total) in t.totals.iter().enumerate() {
                cells.push(CellValue::Int(total.round() as i64));
                cells.push(t.means[i].into());
            }
            cells
        })
        .collect();

    Section::new(title).with(Panel::Table(TableData { columns, rows }))
}

/// Top `limit` teams by season total of the first metric.
pub fn top_teams_section(
    settings: &DemoSettings,
    observations: &[Observation],
    limit: usize,
) -> Section {
    let metric = metrics(settings.sport)[0].name;
    let title = format!("{} Top {limit} Teams by {metric}", sport_title(settings));
    let totals = team_totals(observations, 1);
    if totals.is_empty() {
        return Section::message(title, "No observations generated.");
    }

    let bars = top_n(&totals, limit, |t| t.totals[0])
        .into_iter()
        .map(|t| (t.team.clone(), t.totals[0]))
        .collect();
    Section::new(title).with(Panel::Bars(BarSeries::new(bars)))
}

/// Per-bucket values for one team, each with its rolling mean.
pub fn team_trend_section(
    settings: &DemoSettings,
    observations: &[Observation],
    team: &str,
) -> Section {
    let title = format!(
        "{} {team} by {}",
        sport_title(settings),
        bucket_name(settings.sport)
    );
    let series = team_series(observations, team);
    if series.is_empty() {
        let err = DashError::TeamNotFound {
            name: team.trim().to_string(),
        };
        return Section::message(title, err.to_string());
    }

    let mut section = Section::new(title);
    for (i, m) in metrics(settings.sport).iter().enumerate() {
        let values: Vec<f64> = series
            .iter()
            .map(|o| o.values.get(i).copied().unwrap_or(0.0))
            .collect();
        let trend = TrendSeries::new(series.iter().map(|o| o.label.clone()).collect())
            .line(m.name, values.clone())
            .line(
                format!("{ROLLING_WINDOW}-{} mean", bucket_name(settings.sport).to_lowercase()),
                rolling_mean(&values, ROLLING_WINDOW),
            );
        section = section.with(Panel::Trend(trend));
    }
    section
}

/// Generate a season and build all demo sections. `team` defaults to the
/// first placeholder team.
pub fn demo_report(settings: &DemoSettings, team: Option<&str>, limit: usize) -> Vec<Section> {
    let observations = generate(settings);
    let team = team
        .map(str::to_string)
        .or_else(|| observations.first().map(|o| o.team.clone()))
        .unwrap_or_default();
    vec![
        totals_section(settings, &observations),
        top_teams_section(settings, &observations, limit),
        team_trend_section(settings, &observations, &team),
    ]
}

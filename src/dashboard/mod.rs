//! Interactive terminal dashboard.
//!
//! - `app`: input state and key handling (pure)
//! - `ui`: drawing with ratatui
//! - `terminal`: raw-mode setup and the event loop
//!
//! Every input change turns into an [`app::Action`]; [`reload`] re-runs the
//! load for the current inputs and the next frame redraws.

pub mod app;
pub mod terminal;
pub mod ui;


use tracing::info;

use crate::{
    cfbd::{self, CfbdClient},
    cli::types::{ids::CompetitionCode, options::Sport, time::Season},
    core::CachePolicy,
    demo::{self, DemoSettings},
    report::{failure_message, Section},
    soccer::{self, FootballDataClient},
    Result,
};

pub use app::{Action, App};
pub use terminal::run;

/// Rows per leaderboard and bar chart on the dashboard.
pub const DASHBOARD_LIMIT: usize = 5;

/// Where the dashboard gets its data.
#[derive(Clone)]
pub enum Source {
    Cfb(CfbdClient),
    Soccer {
        client: FootballDataClient,
        competition: CompetitionCode,
    },
    Demo {
        sport: Sport,
        seed: u64,
    },
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Cfb(_) => "College Football".to_string(),
            Source::Soccer { competition, .. } => format!("Soccer ({competition})"),
            Source::Demo { sport, .. } => format!("{sport} (demo data)"),
        }
    }

    /// Player search is only offered for college football.
    pub fn supports_search(&self) -> bool {
        matches!(self, Source::Cfb(_))
    }

    fn set_policy(&mut self, policy: CachePolicy) {
        match self {
            Source::Cfb(client) => client.set_policy(policy),
            Source::Soccer { client, .. } => client.set_policy(policy),
            Source::Demo { .. } => {}
        }
    }

    fn demo_settings(sport: Sport, seed: u64, year: Season) -> DemoSettings {
        DemoSettings {
            sport,
            // Each season gets its own draw.
            seed: seed.wrapping_add(u64::from(year.as_u16())),
            season: year,
            ..DemoSettings::default()
        }
    }

    /// Selectable options (teams) for a season.
    pub async fn options(&self, year: Season) -> Result<Vec<String>> {
        match self {
            Source::Cfb(client) => Ok(client
                .get_fbs_teams(year)
                .await?
                .into_iter()
                .map(|t| t.school)
                .collect()),
            Source::Soccer {
                client,
                competition,
            } => soccer::sections::load_team_names(client, competition, year).await,
            Source::Demo { .. } => Ok(demo::team_names(demo::DEFAULT_TEAMS)),
        }
    }

    /// Sections for the current inputs.
    pub async fn sections(
        &self,
        year: Season,
        option: Option<&str>,
        search: Option<&str>,
    ) -> Vec<Section> {
        match (self, option) {
            (Source::Cfb(client), Some(team)) => {
                cfbd::sections::load_report(client, team, year, search, DASHBOARD_LIMIT).await
            }
            (Source::Cfb(client), None) => vec![cfbd::sections::load_teams(client, year).await],
            (
                Source::Soccer {
                    client,
                    competition,
                },
                Some(team),
            ) => {
                soccer::sections::load_report(client, competition, year, team, DASHBOARD_LIMIT)
                    .await
            }
            (
                Source::Soccer {
                    client,
                    competition,
                },
                None,
            ) => {
                let (standings, scorers) = tokio::join!(
                    soccer::sections::load_standings(client, competition, year, DASHBOARD_LIMIT),
                    soccer::sections::load_scorers(client, competition, year, DASHBOARD_LIMIT),
                );
                vec![standings, scorers]
            }
            (Source::Demo { sport, seed }, team) => demo::sections::demo_report(
                &Self::demo_settings(*sport, *seed, year),
                team,
                DASHBOARD_LIMIT,
            ),
        }
    }
}

/// Carry out a load action against `source`, updating `app` in place.
pub async fn reload(source: &mut Source, app: &mut App, action: Action) {
    let refresh = matches!(action, Action::Load { refresh: true, .. });
    if refresh {
        source.set_policy(CachePolicy::Refresh);
    }

    let mut note = None;
    if let Action::Load { options: true, .. } = action {
        match source.options(app.year).await {
            Ok(options) => app.set_options(options),
            Err(e) => {
                app.set_options(Vec::new());
                note = Some(failure_message("options", &e));
            }
        }
    }

    info!(year = %app.year, option = ?app.selected_option(), "loading sections");
    let sections = source
        .sections(app.year, app.selected_option(), app.search.as_deref())
        .await;
    app.set_sections(sections);
    if let Some(note) = note {
        app.status = note;
    }

    if refresh {
        source.set_policy(CachePolicy::Use);
    }
}

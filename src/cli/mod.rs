//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use types::{
    ids::CompetitionCode,
    options::{DashboardSource, LeaderCategory, SeasonType, Sport},
    time::Season,
};

use crate::{
    core::CachePolicy,
    demo::{DEFAULT_SEED, DEFAULT_TEAMS, DEFAULT_WEEKS},
};

/// Options shared by every command that talks to a remote API.
#[derive(Debug, Clone, Default, Args)]
pub struct ApiOptions {
    /// API key (or set the service's env var, e.g. `CFBD_API_KEY`).
    #[clap(long)]
    pub api_key: Option<String>,

    /// Output sections as JSON instead of text.
    #[clap(long)]
    pub json: bool,

    /// Fetch fresh data, overwriting cached responses.
    #[clap(long)]
    pub refresh: bool,

    /// Skip the response cache entirely: no reads, no writes.
    #[clap(long, conflicts_with = "refresh")]
    pub no_cache: bool,
}

impl ApiOptions {
    pub fn cache_policy(&self) -> CachePolicy {
        if self.no_cache {
            CachePolicy::Bypass
        } else {
            CachePolicy::from_refresh(self.refresh)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CfbCmd {
    /// List FBS teams for a season.
    Teams {
        /// Season year (e.g. 2023).
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Season stats, key-stat chart and points trend for one team.
    TeamStats {
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        /// School name as CFBD spells it (e.g. "Texas A&M").
        #[clap(long, short)]
        team: String,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Schedule and results for one team.
    Schedule {
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        #[clap(long, short)]
        team: String,

        #[clap(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Top passers, rushers and receivers for one team.
    TopPlayers {
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        #[clap(long, short)]
        team: String,

        /// Players per leaderboard.
        #[clap(long, short, default_value_t = 5)]
        limit: usize,

        /// Leaderboards to show (repeatable); all when omitted.
        #[clap(long = "category", short = 'c', value_enum)]
        categories: Vec<LeaderCategory>,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Search a player by name and show their season lines.
    Player {
        /// Full or partial player name.
        #[clap(long, short)]
        name: String,

        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Everything above for one team on a single page.
    Report {
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        #[clap(long, short)]
        team: String,

        /// Also search for this player.
        #[clap(long, short)]
        player: Option<String>,

        #[clap(long, short, default_value_t = 5)]
        limit: usize,

        #[clap(flatten)]
        api: ApiOptions,
    },
}

impl CfbCmd {
    pub fn api(&self) -> &ApiOptions {
        match self {
            CfbCmd::Teams { api, .. }
            | CfbCmd::TeamStats { api, .. }
            | CfbCmd::Schedule { api, .. }
            | CfbCmd::TopPlayers { api, .. }
            | CfbCmd::Player { api, .. }
            | CfbCmd::Report { api, .. } => api,
        }
    }
}

/// Competition and season shared by the soccer commands.
#[derive(Debug, Clone, Args)]
pub struct SoccerScope {
    /// Competition code (PL, BL1, PD, SA, FL1, CL, ...).
    #[clap(long, short, default_value_t = CompetitionCode::default())]
    pub competition: CompetitionCode,

    /// First year of the season (2023 for 2023/24).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum SoccerCmd {
    /// League table with goals per game.
    Standings {
        #[clap(flatten)]
        scope: SoccerScope,

        /// Teams in the points chart.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Top scorers with goals per match.
    Scorers {
        #[clap(flatten)]
        scope: SoccerScope,

        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Match log, record and trends for one team.
    Team {
        #[clap(flatten)]
        scope: SoccerScope,

        /// Team name, short name or three-letter code.
        #[clap(long, short)]
        team: String,

        #[clap(flatten)]
        api: ApiOptions,
    },

    /// Standings, scorers and one team on a single page.
    Report {
        #[clap(flatten)]
        scope: SoccerScope,

        #[clap(long, short)]
        team: String,

        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        #[clap(flatten)]
        api: ApiOptions,
    },
}

impl SoccerCmd {
    pub fn api(&self) -> &ApiOptions {
        match self {
            SoccerCmd::Standings { api, .. }
            | SoccerCmd::Scorers { api, .. }
            | SoccerCmd::Team { api, .. }
            | SoccerCmd::Report { api, .. } => api,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct DemoArgs {
    #[clap(long, value_enum, default_value_t = Sport::Cfb)]
    pub sport: Sport,

    /// Random seed; the same seed always produces the same season.
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of placeholder teams (1-26).
    #[clap(long, default_value_t = DEFAULT_TEAMS)]
    pub teams: usize,

    /// Weeks (or matchdays) per team.
    #[clap(long, default_value_t = DEFAULT_WEEKS)]
    pub weeks: u32,

    /// Team for the trend chart (defaults to the first team).
    #[clap(long, short)]
    pub team: Option<String>,

    /// Teams in the top-N chart.
    #[clap(long, short, default_value_t = 5)]
    pub limit: usize,

    #[clap(long, short, default_value_t = Season::default())]
    pub year: Season,

    /// Output sections as JSON instead of text.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct DashboardArgs {
    #[clap(long, value_enum, default_value_t = DashboardSource::Cfb)]
    pub source: DashboardSource,

    /// Starting season; change it with the arrow keys.
    #[clap(long, short, default_value_t = Season::default())]
    pub year: Season,

    /// Competition code for the soccer source.
    #[clap(long, short, default_value_t = CompetitionCode::default())]
    pub competition: CompetitionCode,

    /// Seed for the demo sources.
    #[clap(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// API key (or set `CFBD_API_KEY` / `FOOTBALL_DATA_API_KEY`).
    #[clap(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Parser)]
#[clap(
    name = "sports-dash",
    version,
    about = "College football and soccer stats in the terminal"
)]
pub struct SportsDash {
    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` overrides.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// College football from the College Football Data API
    Cfb {
        #[clap(subcommand)]
        cmd: CfbCmd,
    },

    /// Soccer from football-data.org
    Soccer {
        #[clap(subcommand)]
        cmd: SoccerCmd,
    },

    /// Reports over randomly generated placeholder data
    Demo(DemoArgs),

    /// Interactive terminal dashboard
    Dashboard(DashboardArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        SportsDash::command().debug_assert();
    }

    #[test]
    fn test_parse_cfb_top_players() {
        let cli = SportsDash::try_parse_from([
            "sports-dash",
            "-vv",
            "cfb",
            "top-players",
            "--year",
            "2023",
            "--team",
            "Alabama",
            "-c",
            "passing",
            "-c",
            "rushing",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Cfb {
            cmd:
                CfbCmd::TopPlayers {
                    year,
                    team,
                    limit,
                    categories,
                    api,
                },
        } = cli.command
        else {
            panic!("expected cfb top-players");
        };
        assert_eq!(year, Season::new(2023));
        assert_eq!(team, "Alabama");
        assert_eq!(limit, 5);
        assert_eq!(categories, vec![LeaderCategory::Passing, LeaderCategory::Rushing]);
        assert!(api.json && !api.refresh);
        assert_eq!(api.cache_policy(), CachePolicy::Use);
    }

    #[test]
    fn test_cache_flags_map_to_policy() {
        let policy = |flag: &str| {
            let cli = SportsDash::try_parse_from(["sports-dash", "cfb", "teams", flag]).unwrap();
            let Commands::Cfb { cmd } = cli.command else {
                panic!("expected cfb");
            };
            cmd.api().cache_policy()
        };
        assert_eq!(policy("--refresh"), CachePolicy::Refresh);
        assert_eq!(policy("--no-cache"), CachePolicy::Bypass);

        assert!(SportsDash::try_parse_from([
            "sports-dash",
            "cfb",
            "teams",
            "--refresh",
            "--no-cache"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_soccer_defaults() {
        let cli = SportsDash::try_parse_from([
            "sports-dash",
            "soccer",
            "team",
            "--season",
            "2023",
            "--team",
            "ARS",
            "--competition",
            "bl1",
        ])
        .unwrap();
        let Commands::Soccer {
            cmd: SoccerCmd::Team { scope, team, .. },
        } = cli.command
        else {
            panic!("expected soccer team");
        };
        assert_eq!(scope.competition.as_str(), "BL1");
        assert_eq!(scope.season, Season::new(2023));
        assert_eq!(team, "ARS");
    }

    #[test]
    fn test_rejects_out_of_range_season() {
        assert!(SportsDash::try_parse_from(["sports-dash", "cfb", "teams", "--year", "1850"]).is_err());
    }

    #[test]
    fn test_parse_demo_and_dashboard() {
        let cli = SportsDash::try_parse_from(["sports-dash", "demo", "--sport", "soccer", "--seed", "9"])
            .unwrap();
        let Commands::Demo(args) = cli.command else {
            panic!("expected demo");
        };
        assert_eq!(args.sport, Sport::Soccer);
        assert_eq!(args.seed, 9);
        assert_eq!(args.teams, DEFAULT_TEAMS);

        let cli = SportsDash::try_parse_from(["sports-dash", "dashboard", "--source", "demo-cfb"])
            .unwrap();
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected dashboard");
        };
        assert_eq!(args.source, DashboardSource::DemoCfb);
    }
}

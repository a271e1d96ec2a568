//! Enumerated command-line options.

use serde::Serialize;
use std::fmt;

/// Which part of the college football season to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SeasonType {
    #[default]
    Regular,
    Postseason,
    Both,
}

impl SeasonType {
    /// Value of the `seasonType` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            SeasonType::Regular => "regular",
            SeasonType::Postseason => "postseason",
            SeasonType::Both => "both",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query())
    }
}

/// Player leaderboard categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeaderCategory {
    Passing,
    Rushing,
    Receiving,
}

impl LeaderCategory {
    pub const ALL: [LeaderCategory; 3] = [
        LeaderCategory::Passing,
        LeaderCategory::Rushing,
        LeaderCategory::Receiving,
    ];

    /// Section heading for this leaderboard.
    pub fn title(&self) -> &'static str {
        match self {
            LeaderCategory::Passing => "Top Passers",
            LeaderCategory::Rushing => "Top Rushers",
            LeaderCategory::Receiving => "Top Receivers",
        }
    }
}

impl fmt::Display for LeaderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaderCategory::Passing => "passing",
            LeaderCategory::Rushing => "rushing",
            LeaderCategory::Receiving => "receiving",
        };
        write!(f, "{}", s)
    }
}

/// Sport simulated by the placeholder data generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    #[default]
    Cfb,
    Soccer,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sport::Cfb => write!(f, "College Football"),
            Sport::Soccer => write!(f, "Soccer"),
        }
    }
}

/// Data source behind the interactive dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum DashboardSource {
    #[default]
    Cfb,
    Soccer,
    DemoCfb,
    DemoSoccer,
}

impl fmt::Display for DashboardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DashboardSource::Cfb => "College Football",
            DashboardSource::Soccer => "Soccer",
            DashboardSource::DemoCfb => "College Football (demo data)",
            DashboardSource::DemoSoccer => "Soccer (demo data)",
        };
        write!(f, "{}", s)
    }
}

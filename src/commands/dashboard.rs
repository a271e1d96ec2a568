//! `dashboard` command.

use super::{cfb::cfbd_client, soccer::football_data_client};
use crate::{
    cli::{types::options::DashboardSource, types::options::Sport, DashboardArgs},
    config::Config,
    core::CachePolicy,
    dashboard::{self, Source},
    Result,
};

pub fn dashboard_source(args: &DashboardArgs, config: &Config) -> Result<Source> {
    Ok(match args.source {
        DashboardSource::Cfb => Source::Cfb(cfbd_client(config, args.api_key.clone(), CachePolicy::Use)?),
        DashboardSource::Soccer => Source::Soccer {
            client: football_data_client(config, args.api_key.clone(), CachePolicy::Use)?,
            competition: args.competition.clone(),
        },
        DashboardSource::DemoCfb => Source::Demo {
            sport: Sport::Cfb,
            seed: args.seed,
        },
        DashboardSource::DemoSoccer => Source::Demo {
            sport: Sport::Soccer,
            seed: args.seed,
        },
    })
}

pub async fn handle_dashboard(args: DashboardArgs, config: &Config) -> Result<()> {
    let source = dashboard_source(&args, config)?;
    // tarpaulin::skip - needs a real terminal
    dashboard::run(source, args.year).await?;
    Ok(())
}

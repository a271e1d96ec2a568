//! `demo` command.

use super::{emit, validate_limit};
use crate::{
    cli::DemoArgs,
    demo::{sections::demo_report, DemoSettings},
    report::Section,
    Result,
};

impl From<&DemoArgs> for DemoSettings {
    fn from(args: &DemoArgs) -> Self {
        Self {
            sport: args.sport,
            seed: args.seed,
            teams: args.teams,
            buckets: args.weeks,
            season: args.year,
        }
    }
}

pub fn demo_sections(args: &DemoArgs) -> Result<Vec<Section>> {
    let settings = DemoSettings::from(args);
    settings.validate()?;
    Ok(demo_report(
        &settings,
        args.team.as_deref(),
        validate_limit(args.limit)?,
    ))
}

pub fn handle_demo(args: DemoArgs) -> Result<()> {
    emit(&demo_sections(&args)?, args.json)
}

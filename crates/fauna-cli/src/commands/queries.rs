//! Queries command: print the polymorphic and derived query SQL for a layout

use clap::Args;
use fauna_core::{Layout, Species};
use fauna_store::strategy_for;
use std::io::Write;

#[derive(Debug, Args)]
pub struct QueriesArgs {
    #[arg(long, env = "FAUNA_LAYOUT")]
    pub layout: Layout,
}

pub fn execute(args: QueriesArgs, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let strategy = strategy_for(args.layout);
    writeln!(out, "-- polymorphic")?;
    writeln!(out, "{};", strategy.polymorphic_query())?;
    for species in Species::ALL {
        writeln!(out, "-- derived: {}", species.discriminator())?;
        writeln!(out, "{};", strategy.derived_query(species))?;
    }
    Ok(())
}

//! Schema command: print the migration DDL for a layout

use clap::Args;
use fauna_core::Layout;
use fauna_store::migrations::get_migrations;
use std::io::Write;

#[derive(Debug, Args)]
pub struct SchemaArgs {
    #[arg(long, env = "FAUNA_LAYOUT")]
    pub layout: Layout,
}

pub fn execute(args: SchemaArgs, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    for migration in get_migrations(args.layout) {
        writeln!(out, "-- {}", migration.id)?;
        writeln!(out, "{}", migration.sql.trim_end())?;
    }
    Ok(())
}

//! Demo command

use crate::output::{write_report, OutputFormat};
use clap::Args;
use fauna_core::Layout;
use fauna_engine::{run_demo, Session};
use fauna_store::StoreConfig;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Physical layout: single_table, joined or table_per_class
    #[arg(long, env = "FAUNA_LAYOUT")]
    pub layout: Layout,

    /// Database file; an in-memory database is used when omitted
    #[arg(long, env = "FAUNA_DB")]
    pub db: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: DemoArgs, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    run(args.layout, args.db, args.format, out)
}

pub fn run(
    layout: Layout,
    db: Option<PathBuf>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_path(db, layout);
    let mut session = Session::open(&config)?;
    let report = run_demo(&mut session)?;
    session.close()?;

    write_report(&report, format, out)
}

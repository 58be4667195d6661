//! Fauna CLI
//!
//! Persist and query the animal hierarchy under a chosen physical layout

use clap::{Parser, Subcommand};
use fauna_cli::commands;
use fauna_core::logging_facility::{self, Profile};

#[derive(Debug, Parser)]
#[command(name = "fauna")]
#[command(about = "Fauna - inheritance mapping over SQLite", long_about = None)]
struct Cli {
    /// Logging profile: dev, prod (JSON) or off
    #[arg(long, global = true, env = "FAUNA_LOG", default_value = "off")]
    log: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save a cat and a dog, then run the polymorphic and derived queries
    Demo(commands::demo::DemoArgs),
    /// Print the schema DDL for a layout
    Schema(commands::schema::SchemaArgs),
    /// Print the query SQL for a layout
    Queries(commands::queries::QueriesArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Commands::Demo(args) => commands::demo::execute(args, &mut out),
        Commands::Schema(args) => commands::schema::execute(args, &mut out),
        Commands::Queries(args) => commands::queries::execute(args, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

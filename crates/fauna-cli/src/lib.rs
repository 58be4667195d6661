//! Fauna CLI - process entry points
//!
//! The `fauna` binary exposes the demo and the layout inspection commands;
//! the three fixed-layout binaries run the demo with no arguments.

pub mod commands;
pub mod output;

use fauna_core::logging_facility::{self, Profile};
use fauna_core::Layout;
use std::io::Write;

/// Environment variable selecting the logging profile
pub const LOG_ENV: &str = "FAUNA_LOG";

/// Install logging from `FAUNA_LOG`; silent when unset or unrecognised
pub fn init_logging_from_env() {
    let profile = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<Profile>().ok())
        .unwrap_or(Profile::Test);
    logging_facility::init(profile);
}

/// Body of the no-argument binaries: demo against a fresh in-memory store
///
/// Returns the process exit code.
pub fn run_fixed(layout: Layout) -> i32 {
    init_logging_from_env();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = commands::demo::run(layout, None, output::OutputFormat::Text, &mut out)
        .and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(layout = layout.as_str(), error = %e, "demo failed");
            eprintln!("Error: {}", e);
            1
        }
    }
}

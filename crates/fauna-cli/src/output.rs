//! Rendering of command results

use clap::ValueEnum;
use fauna_engine::DemoReport;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One description per line
    #[default]
    Text,
    /// The full report as one JSON document
    Json,
}

pub fn write_report(
    report: &DemoReport,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

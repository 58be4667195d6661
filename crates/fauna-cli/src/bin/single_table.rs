//! Demo against a fresh in-memory single table store

use fauna_core::Layout;

fn main() {
    std::process::exit(fauna_cli::run_fixed(Layout::SingleTable));
}

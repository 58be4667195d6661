//! Migration framework
//!
//! Provides:
//! - Per-layout embedded SQL migrations
//! - Migration runner with checksums and layout guard
//! - Idempotent application

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::{applied_layout, apply_migrations};

//! Fauna Store - SQLite record store for the animal hierarchy
//!
//! Provides:
//! - Connection management and configuration
//! - Per-layout schema migrations with checksums
//! - The shared table-backed id generator
//! - One mapping strategy per physical layout

pub mod config;
pub mod db;
pub mod errors;
pub mod ids;
pub mod mapping;
pub mod migrations;

// Re-export key types
pub use config::{DatabaseLocation, StoreConfig};
pub use errors::Result;
pub use mapping::{strategy_for, AnimalRow, MappingStrategy, RowTag};

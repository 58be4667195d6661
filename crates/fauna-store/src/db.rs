//! Database connection management
//!
//! Provides utilities for opening, configuring and migrating SQLite connections

#![allow(clippy::result_large_err)]

use crate::config::{DatabaseLocation, StoreConfig};
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply connection-level settings from the configuration
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", config.foreign_keys)
        .map_err(from_rusqlite)?;

    if config.wal && matches!(config.location, DatabaseLocation::File(_)) {
        let mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    Ok(())
}

/// Open, configure and migrate a connection for the configured layout
pub fn connect(config: &StoreConfig) -> Result<Connection> {
    let mut conn = match &config.location {
        DatabaseLocation::InMemory => open_in_memory()?,
        DatabaseLocation::File(path) => open(path)?,
    };
    configure(&conn, config)?;
    apply_migrations(&mut conn, config.layout)?;
    tracing::debug!(layout = %config.layout, "store connected");
    Ok(conn)
}

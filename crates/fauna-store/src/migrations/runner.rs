//! Migration runner
//!
//! Applies a layout's migrations with checksums, a layout guard and idempotency

#![allow(clippy::result_large_err)]

use crate::errors::{checksum_mismatch, from_rusqlite, layout_mismatch, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use fauna_core::Layout;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations for `layout` to the database
///
/// # Errors
/// - `LayoutMismatch` if the database was migrated for another layout
/// - `ConstraintViolation` if an applied migration's checksum changed
/// - `Storage` if a migration fails to execute
pub fn apply_migrations(conn: &mut Connection, layout: Layout) -> Result<()> {
    create_schema_version_table(conn)?;

    if let Some(found) = applied_layout(conn)? {
        if found != layout.as_str() {
            return Err(layout_mismatch(layout, &found));
        }
    }

    for migration in get_migrations(layout) {
        apply_migration(conn, layout, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Layout recorded by the first applied migration, if any
pub fn applied_layout(conn: &Connection) -> Result<Option<String>> {
    let has_ledger: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |_| Ok(true),
        )
        .optional()
        .map_err(from_rusqlite)?
        .unwrap_or(false);

    if !has_ledger {
        return Ok(None);
    }

    conn.query_row(
        "SELECT layout FROM schema_version ORDER BY id LIMIT 1",
        [],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            layout TEXT NOT NULL,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(
    conn: &mut Connection,
    layout: Layout,
    migration_id: &str,
    sql: &str,
) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        return match recorded {
            Some(stored) if stored != checksum => {
                Err(checksum_mismatch(migration_id, &stored, &checksum))
            }
            _ => Ok(()),
        };
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, layout, applied_at, checksum) VALUES (?, ?, ?, ?)",
        rusqlite::params![migration_id, layout.as_str(), now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(migration_id, layout = %layout, "migration applied");

    Ok(())
}

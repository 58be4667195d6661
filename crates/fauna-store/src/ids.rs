//! Shared table-backed identifier generator
//!
//! Table-per-class storage has no table that owns the id sequence, so every
//! subtype table draws from one row in `id_generators`. Reads and advances
//! happen on the caller's connection, inside its transaction.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use fauna_core::errors::{ExError, ExErrorKind};
use fauna_core::AnimalId;
use rusqlite::{Connection, OptionalExtension};

/// Sequence shared by every concrete animal table
pub const ANIMAL_SEQUENCE: &str = "animal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableIdGenerator {
    sequence: &'static str,
}

impl TableIdGenerator {
    pub const fn new(sequence: &'static str) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &'static str {
        self.sequence
    }

    /// Hand out the next identifier and advance the sequence
    pub fn next_id(&self, conn: &Connection) -> Result<AnimalId> {
        let id = self.peek(conn)?;
        let next = self.successor("next_id", id)?;
        conn.execute(
            "UPDATE id_generators SET next_val = ?1 WHERE sequence_name = ?2",
            rusqlite::params![next, self.sequence],
        )
        .map_err(from_rusqlite)?;
        Ok(id)
    }

    /// Advance the sequence past an explicitly supplied identifier
    pub fn observe(&self, conn: &Connection, id: AnimalId) -> Result<()> {
        let next = self.successor("observe", id)?;
        // The sequence row must exist
        self.peek(conn)?;
        conn.execute(
            "UPDATE id_generators SET next_val = MAX(next_val, ?1) WHERE sequence_name = ?2",
            rusqlite::params![next, self.sequence],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Next value after `id`; the largest id leaves nothing to hand out
    fn successor(&self, op: &str, id: AnimalId) -> Result<AnimalId> {
        id.checked_add(1).ok_or_else(|| {
            ExError::new(ExErrorKind::ConstraintViolation)
                .with_op(op)
                .with_entity_id(id.to_string())
                .with_message(format!("Id generator '{}' is exhausted", self.sequence))
        })
    }

    /// Identifier the next call to `next_id` would return
    pub fn peek(&self, conn: &Connection) -> Result<AnimalId> {
        conn.query_row(
            "SELECT next_val FROM id_generators WHERE sequence_name = ?1",
            [self.sequence],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?
        .ok_or_else(|| {
            ExError::new(ExErrorKind::Storage)
                .with_op("next_id")
                .with_message(format!("Id generator row '{}' is missing", self.sequence))
        })
    }
}

impl Default for TableIdGenerator {
    fn default() -> Self {
        Self::new(ANIMAL_SEQUENCE)
    }
}

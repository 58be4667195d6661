//! Joined layout
//!
//! The base `animal` table owns id and name; each subtype has its own table
//! keyed by the base id. A save writes two rows, so the caller must run it
//! inside one transaction.

#![allow(clippy::result_large_err)]

use super::{query_rows, species_row, AnimalRow, MappingStrategy, RowTag};
use crate::errors::{from_rusqlite, Result};
use fauna_core::model::species::BASE_CLASS_MARKER;
use fauna_core::{Animal, AnimalId, Layout, MakeNoise, Species};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, Default)]
pub struct JoinedStrategy;

impl MappingStrategy for JoinedStrategy {
    fn layout(&self) -> Layout {
        Layout::Joined
    }

    fn encode(&self, animal: &Animal) -> AnimalRow {
        AnimalRow {
            id: animal.id().unwrap_or_default(),
            name: animal.name().map(str::to_string),
            tag: RowTag::ClassMarker(animal.species().class_marker()),
        }
    }

    fn insert(&self, conn: &Connection, animal: &Animal) -> Result<AnimalId> {
        conn.execute(
            "INSERT INTO animal (id, name) VALUES (?1, ?2)",
            rusqlite::params![animal.id(), animal.name()],
        )
        .map_err(from_rusqlite)?;
        let id = animal.id().unwrap_or_else(|| conn.last_insert_rowid());

        let table = animal.species().table_name();
        conn.execute(&format!("INSERT INTO {} (id) VALUES (?1)", table), [id])
            .map_err(from_rusqlite)?;

        tracing::debug!(animal_id = id, table, "joined rows written");
        Ok(id)
    }

    fn select_all(&self, conn: &Connection) -> Result<Vec<AnimalRow>> {
        query_rows(conn, &self.polymorphic_query(), [], |row| {
            Ok(AnimalRow {
                id: row.get(0)?,
                name: row.get(1)?,
                tag: RowTag::ClassMarker(row.get(2)?),
            })
        })
    }

    fn select_species(&self, conn: &Connection, species: Species) -> Result<Vec<AnimalRow>> {
        query_rows(conn, &self.derived_query(species), [], species_row(species))
    }

    /// Outer join across every subtype table; the class marker comes from
    /// whichever subtype row is present
    fn polymorphic_query(&self) -> String {
        let mut joins = String::new();
        let mut cases = String::new();
        for (i, species) in Species::ALL.iter().enumerate() {
            let alias = format!("s{}", i);
            joins.push_str(&format!(
                " LEFT OUTER JOIN {table} {alias} ON a.id = {alias}.id",
                table = species.table_name(),
                alias = alias
            ));
            cases.push_str(&format!(
                " WHEN {}.id IS NOT NULL THEN {}",
                alias,
                species.class_marker()
            ));
        }
        format!(
            "SELECT a.id, a.name, CASE{} WHEN a.id IS NOT NULL THEN {} END AS clazz FROM animal a{}",
            cases, BASE_CLASS_MARKER, joins
        )
    }

    fn derived_query(&self, species: Species) -> String {
        format!(
            "SELECT s.id, a.name FROM {} s INNER JOIN animal a ON s.id = a.id",
            species.table_name()
        )
    }
}

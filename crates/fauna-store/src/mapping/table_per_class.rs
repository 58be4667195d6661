//! Table-per-concrete-class layout
//!
//! Each subtype table holds every field, inherited and own. There is no base
//! table: identifiers come from the shared generator, and the polymorphic
//! query is a union of per-subtype selects tagged with literal class markers.

#![allow(clippy::result_large_err)]

use super::{query_rows, species_row, AnimalRow, MappingStrategy, RowTag};
use crate::errors::{from_rusqlite, Result};
use crate::ids::TableIdGenerator;
use fauna_core::errors::ExError;
use fauna_core::{Animal, AnimalId, FaunaError, Layout, MakeNoise, Species};
use rusqlite::{Connection, OptionalExtension};

#[derive(Debug, Clone, Copy, Default)]
pub struct TablePerClassStrategy {
    ids: TableIdGenerator,
}

impl TablePerClassStrategy {
    pub fn new(ids: TableIdGenerator) -> Self {
        Self { ids }
    }

    /// Subtype table already holding `id`, if any
    fn owner_of(&self, conn: &Connection, id: AnimalId) -> Result<Option<&'static str>> {
        for species in Species::ALL {
            let table = species.table_name();
            let found = conn
                .query_row(
                    &format!("SELECT 1 FROM {} WHERE id = ?1", table),
                    [id],
                    |_| Ok(()),
                )
                .optional()
                .map_err(from_rusqlite)?;
            if found.is_some() {
                return Ok(Some(table));
            }
        }
        Ok(None)
    }

    fn resolve_id(&self, conn: &Connection, animal: &Animal) -> Result<AnimalId> {
        match animal.id() {
            None => self.ids.next_id(conn),
            Some(id) => {
                // Per-table keys cannot see the other tables
                if let Some(table) = self.owner_of(conn, id)? {
                    return Err(ExError::from(FaunaError::IdCollision {
                        id,
                        table: table.to_string(),
                    }));
                }
                self.ids.observe(conn, id)?;
                Ok(id)
            }
        }
    }
}

impl MappingStrategy for TablePerClassStrategy {
    fn layout(&self) -> Layout {
        Layout::TablePerClass
    }

    fn encode(&self, animal: &Animal) -> AnimalRow {
        AnimalRow {
            id: animal.id().unwrap_or_default(),
            name: animal.name().map(str::to_string),
            tag: RowTag::ClassMarker(animal.species().class_marker()),
        }
    }

    fn insert(&self, conn: &Connection, animal: &Animal) -> Result<AnimalId> {
        let id = self.resolve_id(conn, animal)?;
        let table = animal.species().table_name();
        conn.execute(
            &format!("INSERT INTO {} (id, name) VALUES (?1, ?2)", table),
            rusqlite::params![id, animal.name()],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(animal_id = id, table, sequence = self.ids.sequence(), "row written");
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

    /// Columns align by name, order and type across branches. `UNION ALL`
    /// keeps every row: branches never share an id, so nothing needs merging.
    fn polymorphic_query(&self) -> String {
        let branches: Vec<String> = Species::ALL
            .iter()
            .map(|species| {
                format!(
                    "SELECT id, name, {} AS clazz FROM {}",
                    species.class_marker(),
                    species.table_name()
                )
            })
            .collect();
        format!(
            "SELECT a.id, a.name, a.clazz FROM ({}) a",
            branches.join(" UNION ALL ")
        )
    }

    fn derived_query(&self, species: Species) -> String {
        format!("SELECT s.id, s.name FROM {} s", species.table_name())
    }
}

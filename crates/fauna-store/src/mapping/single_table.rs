//! Single-table layout
//!
//! All subtypes share the `animal` table; `dtype` holds the discriminator.

#![allow(clippy::result_large_err)]

use super::{query_rows, species_row, AnimalRow, MappingStrategy, RowTag};
use crate::errors::{from_rusqlite, Result};
use fauna_core::{Animal, AnimalId, Layout, MakeNoise, Species};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleTableStrategy;

impl MappingStrategy for SingleTableStrategy {
    fn layout(&self) -> Layout {
        Layout::SingleTable
    }

    fn encode(&self, animal: &Animal) -> AnimalRow {
        AnimalRow {
            id: animal.id().unwrap_or_default(),
            name: animal.name().map(str::to_string),
            tag: RowTag::Discriminator(animal.species().discriminator().to_string()),
        }
    }

    fn insert(&self, conn: &Connection, animal: &Animal) -> Result<AnimalId> {
        // A NULL id lets SQLite assign the next rowid
        conn.execute(
            "INSERT INTO animal (id, dtype, name) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                animal.id(),
                animal.species().discriminator(),
                animal.name()
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(animal.id().unwrap_or_else(|| conn.last_insert_rowid()))
    }

    fn select_all(&self, conn: &Connection) -> Result<Vec<AnimalRow>> {
        query_rows(conn, &self.polymorphic_query(), [], |row| {
            Ok(AnimalRow {
                id: row.get(0)?,
                name: row.get(1)?,
                tag: RowTag::Discriminator(row.get(2)?),
            })
        })
    }

    fn select_species(&self, conn: &Connection, species: Species) -> Result<Vec<AnimalRow>> {
        query_rows(
            conn,
            &self.derived_query(species),
            [species.discriminator()],
            species_row(species),
        )
    }

    fn polymorphic_query(&self) -> String {
        "SELECT a.id, a.name, a.dtype FROM animal a".to_string()
    }

    fn derived_query(&self, _species: Species) -> String {
        "SELECT a.id, a.name FROM animal a WHERE a.dtype = ?1".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;
    use fauna_core::{Cat, Dog};

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn, Layout::SingleTable).unwrap();
        conn
    }

    #[test]
    fn test_insert_writes_discriminator() {
        let conn = setup();
        let id = SingleTableStrategy
            .insert(&conn, &Cat::named("Garfield").into())
            .unwrap();
        let dtype: String = conn
            .query_row("SELECT dtype FROM animal WHERE id = ?1", [id], |r| r.get(0))
            .unwrap();
        assert_eq!(dtype, "Cat");
    }

    #[test]
    fn test_derived_query_filters_by_discriminator() {
        let conn = setup();
        SingleTableStrategy
            .insert(&conn, &Cat::named("Garfield").into())
            .unwrap();
        SingleTableStrategy
            .insert(&conn, &Dog::named("Max").into())
            .unwrap();

        let dogs = SingleTableStrategy
            .select_species(&conn, Species::Dog)
            .unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].name.as_deref(), Some("Max"));
        assert_eq!(dogs[0].tag, RowTag::Species(Species::Dog));
    }
}

//! Entity accessor with boundary logging.
//!
//! Bridges typed animals and record store rows through the active mapping
//! strategy.
//!
//! ## Logging Ownership
//!
//! The accessor owns lifecycle logging for entity operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use fauna_core::rules::validate_for_save;
use fauna_core::{log_op_end, log_op_error, log_op_start};
use fauna_core::{Animal, AnimalId, Layout, MakeNoise, Subtype};
use fauna_store::errors::{from_rusqlite, Result};
use fauna_store::mapping::{strategy_for, MappingStrategy};
use rusqlite::{Connection, Transaction};
use std::time::Instant;

pub struct EntityAccessor {
    strategy: Box<dyn MappingStrategy>,
}

impl EntityAccessor {
    pub fn new(layout: Layout) -> Self {
        Self::with_strategy(strategy_for(layout))
    }

    pub fn with_strategy(strategy: Box<dyn MappingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn layout(&self) -> Layout {
        self.strategy.layout()
    }

    pub fn strategy(&self) -> &dyn MappingStrategy {
        self.strategy.as_ref()
    }

    /// Persist an animal
    ///
    /// Assigns an identifier if absent and stores it back into `animal`.
    /// The write runs in a savepoint, so a multi-table save either lands
    /// completely or not at all, even inside a larger transaction.
    ///
    /// ## Errors
    ///
    /// - `Validation`: name not set; nothing is written
    /// - `Storage` / `ConstraintViolation`: the write failed
    pub fn save(&self, tx: &mut Transaction<'_>, animal: &mut Animal) -> Result<AnimalId> {
        let layout = self.layout();
        let species = animal.species();
        log_op_start!(
            "animal_save",
            layout = layout.as_str(),
            species = species.discriminator()
        );
        let start = Instant::now();

        let id = self.save_impl(tx, animal).map_err(|e| {
            log_op_error!(
                "animal_save",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                layout = layout.as_str()
            );
            e
        })?;

        log_op_end!(
            "animal_save",
            duration_ms = start.elapsed().as_millis() as u64,
            layout = layout.as_str(),
            animal_id = id
        );

        Ok(id)
    }

    fn save_impl(&self, tx: &mut Transaction<'_>, animal: &mut Animal) -> Result<AnimalId> {
        validate_for_save(animal)?;

        let savepoint = tx.savepoint().map_err(from_rusqlite)?;
        let id = self.strategy.insert(&savepoint, animal)?;
        savepoint.commit().map_err(from_rusqlite)?;

        animal.set_id(id);
        Ok(id)
    }

    /// Polymorphic query: every stored animal as its concrete subtype
    ///
    /// ## Errors
    ///
    /// - `Decode`: a row's discriminator or marker names no subtype
    /// - `Storage`: the read failed
    pub fn query_all(&self, conn: &Connection) -> Result<Vec<Animal>> {
        let layout = self.layout();
        log_op_start!("animal_query_all", layout = layout.as_str());
        let start = Instant::now();

        let animals: Vec<Animal> = self
            .strategy
            .select_all(conn)
            .and_then(|rows| rows.into_iter().map(|row| row.reconstruct()).collect())
            .map_err(|e: fauna_core::ExError| {
                log_op_error!(
                    "animal_query_all",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    layout = layout.as_str()
                );
                e
            })?;

        log_op_end!(
            "animal_query_all",
            duration_ms = start.elapsed().as_millis() as u64,
            layout = layout.as_str(),
            row_count = animals.len() as u64
        );

        Ok(animals)
    }

    /// Derived-class query: only animals of subtype `T`
    ///
    /// ## Errors
    ///
    /// - `Storage`: the read failed
    pub fn query_by_subtype<T: Subtype>(&self, conn: &Connection) -> Result<Vec<T>> {
        let layout = self.layout();
        let species = T::SPECIES;
        log_op_start!(
            "animal_query_by_subtype",
            layout = layout.as_str(),
            species = species.discriminator()
        );
        let start = Instant::now();

        let rows = self.strategy.select_species(conn, species).map_err(|e| {
            log_op_error!(
                "animal_query_by_subtype",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                layout = layout.as_str()
            );
            e
        })?;
        let typed: Vec<T> = rows
            .into_iter()
            .map(|row| T::from_parts(row.id, row.name))
            .collect();

        log_op_end!(
            "animal_query_by_subtype",
            duration_ms = start.elapsed().as_millis() as u64,
            layout = layout.as_str(),
            row_count = typed.len() as u64
        );

        Ok(typed)
    }

    /// `"<name> making <noise> noises"`
    pub fn describe(entity: &impl MakeNoise) -> String {
        entity.describe()
    }
}

//! Scripted persist-then-query sequence
//!
//! Transaction one saves a cat and a dog; transaction two reads them back
//! through the polymorphic query and the derived query for dogs.

#![allow(clippy::result_large_err)]

use crate::session::Session;
use fauna_core::{Animal, Cat, Dog, Layout, MakeNoise};
use fauna_store::errors::Result;
use serde::Serialize;

pub const SAVE_TRANSACTION: &str = "inheritance_mapping";
pub const QUERY_TRANSACTION: &str = "polymorphic_and_derived_queries";

/// Outcome of [`run_demo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub layout: Layout,
    /// Entities as saved, with assigned ids
    pub saved: Vec<Animal>,
    /// Polymorphic query results
    pub animals: Vec<Animal>,
    /// Derived (dog-only) query results
    pub dogs: Vec<Dog>,
}

impl DemoReport {
    /// One description per record: polymorphic results, then derived results
    pub fn lines(&self) -> Vec<String> {
        self.animals
            .iter()
            .map(|animal| animal.describe())
            .chain(self.dogs.iter().map(|dog| dog.describe()))
            .collect()
    }
}

/// Run the demo against `session`
///
/// # Errors
/// Validation, storage and decode failures from either transaction. A
/// failure in the first transaction rolls it back and skips the second.
pub fn run_demo(session: &mut Session) -> Result<DemoReport> {
    let layout = session.layout();
    tracing::info!(layout = layout.as_str(), "running demo");

    let saved = session.transaction(SAVE_TRANSACTION, |uow| {
        let mut batch: Vec<Animal> = vec![Cat::named("Garfield").into(), Dog::named("Max").into()];
        uow.save_all(&mut batch)?;
        Ok(batch)
    })?;

    let (animals, dogs) = session.transaction(QUERY_TRANSACTION, |uow| {
        let animals = uow.query_all()?;
        let dogs = uow.query_by_subtype::<Dog>()?;
        Ok((animals, dogs))
    })?;

    Ok(DemoReport {
        layout,
        saved,
        animals,
        dogs,
    })
}

//! Physical rows and their decoding into typed animals

use fauna_core::errors::ExError;
use fauna_core::{Animal, AnimalId, Species};

/// How a fetched row names its concrete subtype
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTag {
    /// Single-table `dtype` column value
    Discriminator(String),
    /// Joined `CASE` result or table-per-class union literal
    ClassMarker(i64),
    /// Subtype fixed by the query itself (derived-class queries)
    Species(Species),
}

impl RowTag {
    /// Decode the tag; unrecognised values are errors, never a default
    pub fn species(&self) -> Result<Species, ExError> {
        let species = match self {
            RowTag::Discriminator(value) => Species::from_discriminator(value)?,
            RowTag::ClassMarker(marker) => Species::from_class_marker(*marker)?,
            RowTag::Species(species) => *species,
        };
        Ok(species)
    }
}

/// One animal as stored: identifier, name and subtype tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalRow {
    pub id: AnimalId,
    pub name: Option<String>,
    pub tag: RowTag,
}

impl AnimalRow {
    /// Rebuild the typed instance this row represents
    ///
    /// # Errors
    /// `Decode` if the tag names no concrete subtype.
    pub fn reconstruct(self) -> Result<Animal, ExError> {
        let species = self
            .tag
            .species()
            .map_err(|e| e.with_entity_id(self.id.to_string()))?;
        Ok(Animal::from_parts(species, self.id, self.name))
    }
}

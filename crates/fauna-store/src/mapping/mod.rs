//! Mapping strategies
//!
//! Each strategy translates the logical hierarchy {Animal, Dog, Cat} into one
//! physical layout: how a save is written, how the polymorphic query is
//! answered and how a derived-class query is answered.
//!
//! Strategies issue plain statements on the connection they are given. The
//! caller owns the transaction; a multi-statement save is only atomic when
//! run inside one.

#![allow(clippy::result_large_err)]

pub mod joined;
pub mod row;
pub mod single_table;
pub mod table_per_class;

pub use joined::JoinedStrategy;
pub use row::{AnimalRow, RowTag};
pub use single_table::SingleTableStrategy;
pub use table_per_class::TablePerClassStrategy;

use crate::errors::{from_rusqlite, Result};
use crate::ids::TableIdGenerator;
use fauna_core::{Animal, AnimalId, Layout, Species};
use rusqlite::{Connection, Params, Row};

/// Physical layout policy for the animal hierarchy
pub trait MappingStrategy {
    fn layout(&self) -> Layout;

    /// Physical row shape this layout stores for `animal`
    ///
    /// An unsaved animal encodes with id 0.
    fn encode(&self, animal: &Animal) -> AnimalRow;

    /// Write `animal`, returning the durable identifier
    ///
    /// A supplied id is honoured; otherwise one is generated.
    fn insert(&self, conn: &Connection, animal: &Animal) -> Result<AnimalId>;

    /// Polymorphic query: every stored animal, in storage order
    fn select_all(&self, conn: &Connection) -> Result<Vec<AnimalRow>>;

    /// Derived-class query: only animals of `species`, in storage order
    fn select_species(&self, conn: &Connection, species: Species) -> Result<Vec<AnimalRow>>;

    /// SQL text of the polymorphic query
    fn polymorphic_query(&self) -> String;

    /// SQL text of the derived-class query for `species`
    fn derived_query(&self, species: Species) -> String;
}

/// Build the strategy for a layout
pub fn strategy_for(layout: Layout) -> Box<dyn MappingStrategy> {
    match layout {
        Layout::SingleTable => Box::new(SingleTableStrategy),
        Layout::Joined => Box::new(JoinedStrategy),
        Layout::TablePerClass => Box::new(TablePerClassStrategy::new(TableIdGenerator::default())),
    }
}

/// Run a query and map every row
pub(crate) fn query_rows<P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<AnimalRow>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<AnimalRow>,
{
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Map an `(id, name)` row for a query fixed to one species
pub(crate) fn species_row(species: Species) -> impl FnMut(&Row<'_>) -> rusqlite::Result<AnimalRow> {
    move |row| {
        Ok(AnimalRow {
            id: row.get(0)?,
            name: row.get(1)?,
            tag: RowTag::Species(species),
        })
    }
}

//! Physical layouts for the animal hierarchy

use crate::errors::FaunaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table/column scheme used to represent the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One `animal` table with a `dtype` discriminator column
    SingleTable,
    /// A base `animal` table plus one table per subtype sharing its id
    Joined,
    /// One table per concrete subtype; no base table
    TablePerClass,
}

/// How a layout obtains identifiers for new records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGeneration {
    /// The single table owning every id assigns it (SQLite rowid)
    Identity,
    /// A shared generator table hands out ids across subtype tables
    Table,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::SingleTable, Layout::Joined, Layout::TablePerClass];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::SingleTable => "single_table",
            Layout::Joined => "joined",
            Layout::TablePerClass => "table_per_class",
        }
    }

    pub fn id_generation(&self) -> IdGeneration {
        match self {
            Layout::SingleTable | Layout::Joined => IdGeneration::Identity,
            Layout::TablePerClass => IdGeneration::Table,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = FaunaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single_table" => Ok(Layout::SingleTable),
            "joined" => Ok(Layout::Joined),
            "table_per_class" => Ok(Layout::TablePerClass),
            _ => Err(FaunaError::UnknownLayout {
                value: s.to_string(),
            }),
        }
    }
}

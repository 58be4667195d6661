use crate::errors::FaunaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete subtype tag for an animal record
///
/// Every stored record carries exactly one species. Decoding never defaults:
/// an unrecognised discriminator or marker is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

/// Class marker of a joined base row with no subtype row.
/// Never decodable: the base type is abstract.
pub const BASE_CLASS_MARKER: i64 = 0;

impl Species {
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    /// Value stored in the single-table `dtype` column
    pub fn discriminator(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }

    /// Integer tag produced by joined and table-per-class polymorphic queries
    pub fn class_marker(&self) -> i64 {
        match self {
            Species::Dog => 1,
            Species::Cat => 2,
        }
    }

    /// Subtype table name in the joined and table-per-class layouts
    pub fn table_name(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }

    pub fn noise(&self) -> &'static str {
        match self {
            Species::Dog => "woof, woof...",
            Species::Cat => "meow, meow...",
        }
    }

    pub fn from_discriminator(value: &str) -> Result<Self, FaunaError> {
        Species::ALL
            .into_iter()
            .find(|s| s.discriminator() == value)
            .ok_or_else(|| FaunaError::UnknownDiscriminator {
                value: value.to_string(),
            })
    }

    pub fn from_class_marker(marker: i64) -> Result<Self, FaunaError> {
        Species::ALL
            .into_iter()
            .find(|s| s.class_marker() == marker)
            .ok_or(FaunaError::UnknownClassMarker { marker })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::species::Species;

/// Durable identifier, unique across the whole hierarchy
pub type AnimalId = i64;

/// Behaviour shared by every concrete animal
pub trait MakeNoise {
    fn name(&self) -> Option<&str>;

    fn make_noise(&self) -> &'static str;

    /// `"<name> making <noise> noises"`; an unset name renders as `null`
    fn describe(&self) -> String {
        format!(
            "{} making {} noises",
            self.name().unwrap_or("null"),
            self.make_noise()
        )
    }
}

/// A concrete subtype that can be queried on its own
pub trait Subtype: MakeNoise + Into<Animal> + Sized {
    const SPECIES: Species;

    /// Rebuild a persisted instance from its stored fields
    fn from_parts(id: AnimalId, name: Option<String>) -> Self;
}

/// Dog - no fields beyond those every animal has
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Assigned on save; `None` while transient
    pub id: Option<AnimalId>,
    pub name: Option<String>,
}

impl Dog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

impl MakeNoise for Dog {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn make_noise(&self) -> &'static str {
        Species::Dog.noise()
    }
}

impl Subtype for Dog {
    const SPECIES: Species = Species::Dog;

    fn from_parts(id: AnimalId, name: Option<String>) -> Self {
        Self { id: Some(id), name }
    }
}

/// Cat - no fields beyond those every animal has
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// Assigned on save; `None` while transient
    pub id: Option<AnimalId>,
    pub name: Option<String>,
}

impl Cat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

impl MakeNoise for Cat {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn make_noise(&self) -> &'static str {
        Species::Cat.noise()
    }
}

impl Subtype for Cat {
    const SPECIES: Species = Species::Cat;

    fn from_parts(id: AnimalId, name: Option<String>) -> Self {
        Self { id: Some(id), name }
    }
}

/// Animal - the abstract base, represented as its closed set of variants
///
/// There is no value for a bare Animal; every instance is a Dog or a Cat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "species")]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
}

impl Animal {
    /// Reconstruct a typed instance from decoded row fields
    pub fn from_parts(species: Species, id: AnimalId, name: Option<String>) -> Self {
        match species {
            Species::Dog => Animal::Dog(Dog::from_parts(id, name)),
            Species::Cat => Animal::Cat(Cat::from_parts(id, name)),
        }
    }

    pub fn species(&self) -> Species {
        match self {
            Animal::Dog(_) => Species::Dog,
            Animal::Cat(_) => Species::Cat,
        }
    }

    pub fn id(&self) -> Option<AnimalId> {
        match self {
            Animal::Dog(d) => d.id,
            Animal::Cat(c) => c.id,
        }
    }

    pub fn set_id(&mut self, id: AnimalId) {
        match self {
            Animal::Dog(d) => d.id = Some(id),
            Animal::Cat(c) => c.id = Some(id),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Animal::Dog(d) => d.set_name(name),
            Animal::Cat(c) => c.set_name(name),
        }
    }

    /// True once a durable identifier has been assigned
    pub fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

impl MakeNoise for Animal {
    fn name(&self) -> Option<&str> {
        match self {
            Animal::Dog(d) => d.name(),
            Animal::Cat(c) => c.name(),
        }
    }

    fn make_noise(&self) -> &'static str {
        match self {
            Animal::Dog(d) => d.make_noise(),
            Animal::Cat(c) => c.make_noise(),
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Animal::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Animal::Cat(cat)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

pub mod animal;
pub mod species;

pub use animal::{Animal, AnimalId, Cat, Dog, MakeNoise, Subtype};
pub use species::Species;

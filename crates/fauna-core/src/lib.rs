//! Fauna Core - in-memory model for the animal hierarchy
//!
//! This crate provides the foundational types shared by the store and engine:
//! - Animal, Dog and Cat as a closed set of tagged variants
//! - Species tags (discriminators and class markers) and physical layouts
//! - Validation rules applied before persisting
//! - The structured error facility and the logging facility

pub mod errors;
pub mod layout;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, FaunaError, Result};
pub use layout::{IdGeneration, Layout};
pub use model::{Animal, AnimalId, Cat, Dog, MakeNoise, Species, Subtype};

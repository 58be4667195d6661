pub mod validation;

pub use validation::validate_for_save;

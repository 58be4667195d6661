use crate::errors::{FaunaError, Result};
use crate::model::{Animal, MakeNoise};

/// Validate an animal before it is written
///
/// The name is the only required field. An empty string is a set name and
/// passes; only an unset name is rejected.
///
/// # Errors
/// Returns `MissingName` when the name was never set.
pub fn validate_for_save(animal: &Animal) -> Result<()> {
    if animal.name().is_none() {
        return Err(FaunaError::MissingName {
            species: animal.species(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cat, Dog, Species};

    #[test]
    fn test_named_animal_passes() {
        assert!(validate_for_save(&Dog::named("Max").into()).is_ok());
    }

    #[test]
    fn test_empty_name_passes() {
        assert!(validate_for_save(&Cat::named("").into()).is_ok());
    }

    #[test]
    fn test_unnamed_animal_fails() {
        let err = validate_for_save(&Cat::new().into()).unwrap_err();
        assert_eq!(
            err,
            FaunaError::MissingName {
                species: Species::Cat
            }
        );
    }
}

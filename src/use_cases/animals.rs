use crate::domain::errors::AnimalError;
use crate::domain::species::{NO_ANIMALS_FOUND, SPECIES_NOT_ALLOWED, is_allowed};

// Return the requested species when it is the allowed one.
pub fn lookup_species(species: &str) -> Result<String, AnimalError> {
    if !is_allowed(species) {
        return Err(AnimalError::InvalidArgument(SPECIES_NOT_ALLOWED.to_string()));
    }

    Ok(species.to_string())
}

// There is no animal collection behind this endpoint, so listing always fails.
pub fn list_animals() -> Result<String, AnimalError> {
    Err(AnimalError::NotFound(NO_ANIMALS_FOUND.to_string()))
}

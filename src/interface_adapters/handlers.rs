use crate::domain::errors::AnimalError;
use crate::domain::species::SPECIES_NOT_ALLOWED;
use crate::use_cases::animals::{list_animals, lookup_species};
use axum::extract::{Path, rejection::PathRejection};

// Handler for a single species lookup.
pub async fn get_species(
    species: Result<Path<String>, PathRejection>,
) -> Result<String, AnimalError> {
    // A segment that cannot be decoded is not "dog" either; keep it on the fault path.
    let Path(species) = species.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "species path rejected");
        AnimalError::InvalidArgument(SPECIES_NOT_ALLOWED.to_string())
    })?;

    tracing::debug!(%species, "species lookup");
    lookup_species(&species)
}

// Handler for the animal collection. Faults are rendered by the translator.
pub async fn get_all_animals() -> Result<String, AnimalError> {
    list_animals()
}

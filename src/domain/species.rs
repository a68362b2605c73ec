// The only species the API knows how to serve.
pub const ALLOWED_SPECIES: &str = "dog";

pub const SPECIES_NOT_ALLOWED: &str = "Only 'dog' is allowed";
pub const NO_ANIMALS_FOUND: &str = "No Animals found";

// Exact, case-sensitive match against the allowed species.
pub fn is_allowed(species: &str) -> bool {
    species == ALLOWED_SPECIES
}

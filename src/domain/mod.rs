pub mod errors;
pub mod species;

use crate::interface_adapters::fault::translate_faults;
use crate::interface_adapters::handlers::{get_all_animals, get_species};
use axum::{Router, middleware, routing::get};

// Build the HTTP router; the fault translator is layered once over every route.
pub fn app() -> Router {
    Router::new()
        .route("/api/animals", get(get_all_animals))
        .route("/api/animals/{species}", get(get_species))
        .layer(middleware::from_fn(translate_faults))
}

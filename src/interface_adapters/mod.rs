pub mod fault;
pub mod handlers;
pub mod protocol;
pub mod routes;

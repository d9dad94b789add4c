pub mod insights;
pub mod models;
pub mod routes;
pub mod store;
pub mod suggestions;

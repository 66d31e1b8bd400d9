pub mod config;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;

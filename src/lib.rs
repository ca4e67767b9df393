pub mod charts;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod routes;
pub mod store;

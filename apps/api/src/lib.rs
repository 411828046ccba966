pub mod config;
pub mod errors;
pub mod keywords;
pub mod models;
pub mod parsing;
pub mod profiles;
pub mod routes;
pub mod scoring;
pub mod state;

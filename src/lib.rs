pub mod app;
pub mod components;
pub mod config;
pub mod graphql;
pub mod models;
pub mod state;
pub mod utils;

// Library root for the Trackn Fitness API application shell

pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod docs;
pub mod middleware;
pub mod models;
pub mod utils;

pub use crate::config::state::AppState;

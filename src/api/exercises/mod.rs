// Exercise database feature module

pub mod dataset;
pub mod handler;
pub mod routes;

use anyhow::Result;
use axum::Router;
use tracing::info;

use crate::api::RouteModule;
use crate::config::state::AppState;

pub struct ExercisesModule;

impl RouteModule for ExercisesModule {
    fn name(&self) -> &'static str {
        "exercises"
    }

    // Forces the embedded dataset to load so a corrupt file fails the
    // composition instead of the first request.
    fn init_routes(&self) -> Result<()> {
        let all = dataset::all()?;
        info!(count = all.len(), "Exercise dataset loaded");
        Ok(())
    }

    fn router(&self) -> Router<AppState> {
        routes::exercise_routes()
    }
}

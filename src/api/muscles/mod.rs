// Target-muscle listing feature module

pub mod handler;
pub mod routes;

use axum::Router;

use crate::api::RouteModule;
use crate::config::state::AppState;

pub struct MusclesModule;

impl RouteModule for MusclesModule {
    fn name(&self) -> &'static str {
        "muscles"
    }

    fn router(&self) -> Router<AppState> {
        routes::muscle_routes()
    }
}

// Exercise route definitions

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", get(handler::list_exercises))
        // `/exercises/search` must be registered before the id capture so
        // the router resolves it as the more specific path
        .route("/exercises/search", get(handler::search_exercises))
        .route("/exercises/{id}", get(handler::get_exercise))
}

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn muscle_routes() -> Router<AppState> {
    Router::new().route("/muscles", get(handler::list_muscles))
}

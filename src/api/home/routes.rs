use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(handler::home_page))
}

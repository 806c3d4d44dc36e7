// Application composer: assembles independently authored feature modules,
// the documentation surface, the fallback handler and the middleware chain
// into a single servable router. Composition happens once at startup and
// is fail-fast: any error aborts the whole thing, so no partially wired
// application is ever exposed.

use anyhow::{anyhow, Context, Result};
use axum::{
    http::{Method, StatusCode},
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing::{error, info};

use crate::api::{home, RouteModule};
use crate::config::state::AppState;
use crate::docs;
use crate::middleware::{
    pretty_json::pretty_json, request_logger::request_logger, response_time::response_time,
};
use crate::models::response::ResponseEnvelope;
use crate::utils::error::handle_panic;

/// Prefix every feature module is mounted under
pub const API_PREFIX: &str = "/api/v1";

const NOT_FOUND_MESSAGE: &str = "Route not found. Check API documentation at /docs";

/// Builds the servable application from the module registry. The original
/// cause of a failure is logged here; callers only see a generic
/// initialization error.
pub fn compose(modules: &[Box<dyn RouteModule>], state: AppState) -> Result<Router> {
    build_router(modules, state).map_err(|err| {
        error!("Failed to initialize application: {err:#}");
        anyhow!("failed to initialize application")
    })
}

fn build_router(modules: &[Box<dyn RouteModule>], state: AppState) -> Result<Router> {
    // Invoke each module's initializer exactly once, then collect its
    // sub-router. Registration is not idempotent: mounting a module twice
    // duplicates its routes.
    let mut api: Router<AppState> = Router::new();
    for module in modules {
        module
            .init_routes()
            .with_context(|| format!("initializing routes for module '{}'", module.name()))?;
        api = api.merge(module.router());
        info!(module = module.name(), "Feature module mounted");
    }

    // Read-only verbs only; all origins allowed
    let cors: CorsLayer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    let router: Router = Router::new()
        .nest(API_PREFIX, api)
        .merge(home::routes::home_routes())
        .route("/swagger", get(docs::openapi_doc))
        .merge(docs::swagger_ui())
        .fallback(route_fallback)
        .layer(
            ServiceBuilder::new()
                // Outermost: a panicking handler still yields an envelope
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(cors)
                .layer(from_fn(request_logger))
                .layer(from_fn(pretty_json))
                .layer(from_fn(response_time)),
        )
        .with_state(state);

    Ok(router)
}

/// Terminal handler for unmatched routes
pub async fn route_fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ResponseEnvelope::error(NOT_FOUND_MESSAGE)),
    )
}

// OpenAPI document generation and the interactive documentation UI.
// The document itself is served at /swagger by a handler so the `servers`
// entry can reflect the host the caller actually reached, honoring an
// `x-forwarded-proto` override from a reverse proxy.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use utoipa::openapi::{InfoBuilder, OpenApi as OpenApiDoc, ServerBuilder};
use utoipa::OpenApi;
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::config::state::AppState;

pub const API_TITLE: &str = "Trackn Fitness API - v1";
pub const API_VERSION: &str = "1.0.0";
const API_DESCRIPTION: &str = "**Trackn Fitness API v1** is a comprehensive and developer-friendly \
fitness exercise database featuring structured exercises with **GIF-based visual media**. It \
includes detailed metadata like target muscles, equipment, and body parts, designed for fast \
integration into fitness apps, personal trainer platforms, and health tools.";

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "exercises", description = "Exercise catalog: listing, search and lookup"),
        (name = "muscles", description = "Target muscles covered by the catalog")
    ),
    paths(
        crate::api::exercises::handler::list_exercises,
        crate::api::exercises::handler::search_exercises,
        crate::api::exercises::handler::get_exercise,
        crate::api::muscles::handler::list_muscles,
    ),
    components(schemas(
        crate::models::exercise::Exercise,
        crate::models::response::ResponseEnvelope,
    ))
)]
pub struct ApiDoc;

/// Serves the OpenAPI 3.1 document with request-derived server info
pub async fn openapi_doc(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<OpenApiDoc> {
    let mut doc: OpenApiDoc = ApiDoc::openapi();

    doc.info = InfoBuilder::new()
        .title(API_TITLE)
        .version(API_VERSION)
        .description(Some(API_DESCRIPTION))
        .build();

    let host: String = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{}:{}", state.environment.host, state.environment.port));

    let protocol: &str = headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(state.environment.protocol.as_ref());

    doc.servers = Some(vec![ServerBuilder::new()
        .url(format!("{protocol}://{host}"))
        .description(Some(
            "Trackn Fitness API v1: exercise database with GIF media and detailed metadata",
        ))
        .build()]);

    Json(doc)
}

/// The documentation UI, mounted at /docs and fetching the live /swagger
/// document. Try-it-out stays disabled; the UI is read-only.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").config(
        Config::new(["/swagger"])
            .try_it_out_enabled(false)
            .display_request_duration(true)
            .doc_expansion("list"),
    )
}

// Reformats JSON response bodies with two-space indentation when the
// request carries a `pretty` query parameter. Whitespace only: the
// logical content must be unchanged, and non-JSON or unparseable bodies
// pass through as-is.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tracing::{error, warn};

use crate::utils::format::to_two_space_indented_json;

fn wants_pretty(req: &Request) -> bool {
    req.uri()
        .query()
        .map(|q| q.split('&').any(|pair| pair == "pretty" || pair.starts_with("pretty=")))
        .unwrap_or(false)
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

pub async fn pretty_json(req: Request, next: Next) -> Response {
    let pretty_requested: bool = wants_pretty(&req);

    let response: Response = next.run(req).await;

    if !pretty_requested || !is_json_response(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    // Collect the entire body before reformatting
    let raw_bytes: Bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            error!("Failed to collect response body for pretty-printing: {err}");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            parts.headers.remove(CONTENT_LENGTH);
            return Response::from_parts(
                parts,
                Body::from(r#"{"success":false,"message":"Internal server error"}"#),
            );
        }
    };

    match serde_json::from_slice::<Value>(&raw_bytes) {
        Ok(value) => match to_two_space_indented_json(&value) {
            Ok(pretty) => {
                parts.headers.remove(CONTENT_LENGTH);
                Response::from_parts(parts, Body::from(pretty))
            }
            Err(err) => {
                error!("Failed to re-serialize response body: {err}");
                Response::from_parts(parts, Body::from(raw_bytes))
            }
        },
        Err(err) => {
            warn!("Response body is not valid JSON; skipping pretty-print: {err}");
            Response::from_parts(parts, Body::from(raw_bytes))
        }
    }
}

// One log line per request: method, path, status, duration. Side effect
// only; the response passes through untouched.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

pub async fn request_logger(req: Request, next: Next) -> Response {
    let method: axum::http::Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let start: Instant = Instant::now();
    let response: Response = next.run(req).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}

// Injects `X-Response-Time` with the elapsed wall-clock milliseconds.
// The timer wraps the downstream chain so it measures true handling
// latency, not just dispatch overhead.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const RESPONSE_TIME_HEADER: HeaderName = HeaderName::from_static("x-response-time");

pub async fn response_time(req: Request, next: Next) -> Response {
    let start: Instant = Instant::now();

    let mut response: Response = next.run(req).await;

    let elapsed_ms: u128 = start.elapsed().as_millis();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed_ms}ms")) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }

    response
}

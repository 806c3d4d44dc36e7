// Request/response interceptors applied to every route. Registration
// order in the composer is the application order: CORS (tower-http
// layer), request logger, pretty-JSON, timing header.

pub mod pretty_json;
pub mod request_logger;
pub mod response_time;

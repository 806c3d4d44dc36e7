pub mod exercise;
pub mod response;

pub use exercise::Exercise;
pub use response::{ApiResponse, ResponseEnvelope};

pub mod error;
pub mod extract;
pub mod format;

pub use error::{ApiError, ApiResult};
pub use format::to_two_space_indented_json;

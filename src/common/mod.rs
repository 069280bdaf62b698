pub mod response;
pub mod status_code;

pub use response::ApiError;
pub use status_code::ErrorCode;

pub mod error_code;
pub mod patch;
pub mod response;

pub use error_code::ErrorCode;
pub use patch::deserialize_present;
pub use response::ApiResponse;

use serde::Serialize;

use crate::errors::AppError;

/// 业务错误码，随 `ApiResponse.code` 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,

    // 用户
    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserNameAlreadyExists = 3002,
    UserPasswordInvalid = 3003,

    // 电影
    MovieNotFound = 4000,
    MovieInvalid = 4001,
    MovieEditWindowExpired = 4003,

    // 影评
    ReviewNotFound = 5000,
    ReviewInvalid = 5001,
    ReviewPermissionDenied = 5003,
}

impl From<&AppError> for ErrorCode {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Validation(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Authentication(_) => ErrorCode::Unauthorized,
            AppError::Authorization(_) => ErrorCode::Forbidden,
            AppError::Conflict(_) => ErrorCode::Conflict,
            _ => ErrorCode::InternalServerError,
        }
    }
}

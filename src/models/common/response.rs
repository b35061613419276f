use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::models::ErrorCode;

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// 将业务错误转换为 HTTP 响应
    ///
    /// 内部错误只记录日志，对外统一返回 "Internal server error"。
    pub fn from_error(err: &AppError, code: Option<ErrorCode>) -> HttpResponse {
        let code = code.unwrap_or_else(|| ErrorCode::from(err));
        let body = if err.is_internal() {
            error!("{}", err);
            Self::error_empty(ErrorCode::InternalServerError, "Internal server error")
        } else {
            Self::error_empty(code, err.message())
        };
        HttpResponse::build(err.status_code()).json(body)
    }
}

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use crate::errors::{AppError, Result};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, auth::UserInfoResponse, users::entities::User};
use crate::storage::Storage;
use crate::utils::Credentials;

use super::AuthService;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// 令牌无效时的统一错误，不区分具体原因
pub fn credentials_error() -> AppError {
    AppError::authentication(INVALID_CREDENTIALS)
}

/// 解析 Bearer 令牌并找到对应用户
///
/// 签名错误、过期、缺少 sub、用户不存在都返回同一个错误。
pub async fn resolve_actor(
    storage: &dyn Storage,
    credentials: &Credentials,
    token: &str,
) -> Result<User> {
    let claims = credentials.jwt.verify_token(token).map_err(|e| {
        debug!("JWT token validation failed: {}", e);
        credentials_error()
    })?;

    let username = claims.sub.ok_or_else(credentials_error)?;

    storage
        .get_user_by_username(&username)
        .await?
        .ok_or_else(credentials_error)
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(ApiResponse::from_error(
            &credentials_error(),
            Some(ErrorCode::Unauthorized),
        )),
    }
}

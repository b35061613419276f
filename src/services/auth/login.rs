use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::errors::{AppError, Result};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::storage::Storage;
use crate::utils::Credentials;
use crate::utils::jwt::AccessToken;
use crate::utils::password::verify_password;

use super::AuthService;

const LOGIN_FAILED: &str = "Incorrect username or password";

/// 校验用户名密码并签发访问令牌
///
/// 用户不存在与密码错误返回相同的错误。
pub async fn authenticate(
    storage: &dyn Storage,
    credentials: &Credentials,
    username: &str,
    password: &str,
) -> Result<AccessToken> {
    let user = storage
        .get_user_by_username(username)
        .await?
        .filter(|user| verify_password(password, &user.password_hash))
        .ok_or_else(|| AppError::authentication(LOGIN_FAILED))?;

    let token = credentials
        .jwt
        .generate_access_token(&user.username)
        .map_err(|e| {
            error!("Failed to generate JWT token: {}", e);
            AppError::credential(format!("Failed to generate token: {e}"))
        })?;

    info!("User {} logged in successfully", user.username);
    Ok(token)
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let credentials = service.get_credentials(request);

    match authenticate(
        storage.as_ref(),
        &credentials,
        &login_request.username,
        &login_request.password,
    )
    .await
    {
        Ok(token) => {
            let response = LoginResponse {
                access_token: token.token,
                token_type: "bearer".to_string(),
                expires_in: token.expires_in,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e @ AppError::Authentication(_)) => {
            info!("Login rejected for {}", login_request.username);
            Ok(ApiResponse::from_error(&e, Some(ErrorCode::AuthFailed)))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, None)),
    }
}

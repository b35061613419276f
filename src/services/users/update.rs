use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::User, requests::UpdateAdminRequest, responses::UserResponse},
};
use crate::storage::Storage;

use super::UserService;

/// 授予或撤销管理员权限
pub async fn set_user_admin(storage: &dyn Storage, user_id: i64, is_admin: bool) -> Result<User> {
    let user = storage
        .set_user_admin(user_id, is_admin)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    info!("User {} admin flag set to {}", user.id, user.is_admin);
    Ok(user)
}

pub async fn handle_set_admin(
    service: &UserService,
    user_id: i64,
    update_data: UpdateAdminRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match set_user_admin(storage.as_ref(), user_id, update_data.is_admin).await {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User role updated successfully",
        ))),
        Err(e @ AppError::NotFound(_)) => {
            Ok(ApiResponse::from_error(&e, Some(ErrorCode::UserNotFound)))
        }
        Err(e) => Ok(ApiResponse::from_error(&e, None)),
    }
}

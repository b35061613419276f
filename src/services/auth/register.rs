use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::User,
        requests::{CreateUserRequest, NewUser},
        responses::UserResponse,
    },
};
use crate::storage::Storage;
use crate::utils::Credentials;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

use super::AuthService;

/// 注册普通用户
pub async fn register_user(
    storage: &dyn Storage,
    credentials: &Credentials,
    username: &str,
    password: &str,
) -> Result<User> {
    validate_username(username).map_err(AppError::validation)?;
    validate_password(password).map_err(AppError::validation)?;

    // 预检查，唯一索引兜底并发注册
    if storage.get_user_by_username(username).await?.is_some() {
        return Err(AppError::conflict("Username already exists"));
    }

    let password_hash = hash_password(password, &credentials.argon2)?;
    let user = storage
        .create_user(NewUser {
            username: username.to_string(),
            password_hash,
            is_admin: false,
        })
        .await?;

    info!("User {} registered (ID: {})", user.username, user.id);
    Ok(user)
}

fn register_error_code(err: &AppError) -> Option<ErrorCode> {
    match err {
        AppError::Conflict(_) => Some(ErrorCode::UserNameAlreadyExists),
        AppError::Validation(msg) if msg.starts_with("Password") => {
            Some(ErrorCode::UserPasswordInvalid)
        }
        AppError::Validation(_) => Some(ErrorCode::UserNameInvalid),
        _ => None,
    }
}

pub async fn handle_register(
    service: &AuthService,
    create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let credentials = service.get_credentials(request);

    match register_user(
        storage.as_ref(),
        &credentials,
        &create_request.username,
        &create_request.password,
    )
    .await
    {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            UserResponse { user },
            "User registered successfully",
        ))),
        Err(e) => Ok(ApiResponse::from_error(&e, register_error_code(&e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::token::tests::test_credentials;
    use crate::storage::sea_orm_storage::tests::memory_storage;

    #[tokio::test]
    async fn test_register_creates_regular_user() {
        let storage = memory_storage().await;
        let user = register_user(&storage, &test_credentials(), "alice", "s3cret")
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert!(!user.is_admin);
        assert_ne!(user.password_hash, "s3cret");
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let storage = memory_storage().await;
        let credentials = test_credentials();
        register_user(&storage, &credentials, "alice", "s3cret")
            .await
            .unwrap();

        let err = register_user(&storage, &credentials, "alice", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(
            register_error_code(&err),
            Some(ErrorCode::UserNameAlreadyExists)
        );
    }

    #[tokio::test]
    async fn test_invalid_input_rejected() {
        let storage = memory_storage().await;
        let credentials = test_credentials();

        let err = register_user(&storage, &credentials, "a b", "s3cret")
            .await
            .unwrap_err();
        assert_eq!(register_error_code(&err), Some(ErrorCode::UserNameInvalid));

        let err = register_user(&storage, &credentials, "alice", "")
            .await
            .unwrap_err();
        assert_eq!(
            register_error_code(&err),
            Some(ErrorCode::UserPasswordInvalid)
        );
    }
}
